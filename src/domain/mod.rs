//! Domain layer: the pattern implementations
//!
//! This layer is independent of external concerns (no CLI, no config loading).

pub mod error;
pub mod factory;
pub mod node;
pub mod options;
pub mod singleton;

pub use error::{DomainError, DomainResult};
pub use factory::{auth_factory, AuthProvider, Customer, GoogleAuth, Provider, Seller, YandexAuth};
pub use node::{indented, Node, WriteOpts, DEFAULT_INDENT};
pub use options::{set_addr, set_db_uri, set_log_file, set_timeout, ConfigOption, ServiceConfig};
pub use singleton::{get_instance, instance_init_count, SingleInstance, SingletonGuard};
