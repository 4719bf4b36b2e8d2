//! Application layer: the demonstration use cases
//!
//! This layer drives the domain patterns and writes their output to a stream.

pub mod error;
pub mod error_ext;
pub mod showcase;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use showcase::{
    demo_tree, run_all, run_factory, run_options, run_prototype, run_singleton, write_banner,
    TreeStyle, CREATED_AT_FORMAT,
};
