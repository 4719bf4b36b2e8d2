//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Output { .. } => crate::exitcode::IOERR,
                ApplicationError::Domain(d) => match d {
                    DomainError::UnknownProvider(_) => crate::exitcode::CONFIG,
                    DomainError::Render { .. } => crate::exitcode::IOERR,
                },
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn given_each_domain_error_when_mapping_then_exit_code_per_kind() {
        let render = CliError::from(ApplicationError::from(DomainError::Render {
            node: "file1".to_string(),
            source: io::Error::new(io::ErrorKind::BrokenPipe, "closed"),
        }));
        let unknown = CliError::from(ApplicationError::from(DomainError::UnknownProvider(
            "github".to_string(),
        )));

        assert_eq!(render.exit_code(), crate::exitcode::IOERR);
        assert_eq!(unknown.exit_code(), crate::exitcode::CONFIG);
    }

    #[test]
    fn given_application_errors_when_mapping_then_config_and_io_codes() {
        let config = CliError::from(ApplicationError::Config {
            message: "bad".to_string(),
        });
        let output = CliError::from(ApplicationError::Output {
            context: "write banner".to_string(),
            source: io::Error::new(io::ErrorKind::Other, "full"),
        });

        assert_eq!(config.exit_code(), crate::exitcode::CONFIG);
        assert_eq!(output.exit_code(), crate::exitcode::IOERR);
        assert_eq!(CliError::InvalidArgs("x".into()).exit_code(), crate::exitcode::USAGE);
    }
}
