//! Design pattern showcase
//!
//! Four small patterns, each in its own domain module:
//! - [`domain::singleton`]: a lazily initialized, thread-safe singleton guard
//! - [`domain::node`]: a prototype tree of files and folders with deep clone
//! - [`domain::options`]: a config assembled from functional options
//! - [`domain::factory`]: an abstract factory selected by provider name
//!
//! The application layer drives them for the `patterns` binary.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
