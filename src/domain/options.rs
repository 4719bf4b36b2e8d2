//! Functional options: a config assembled from an ordered list of setters.

use std::fmt;

/// A single option applied to a [`ServiceConfig`] under construction.
pub type ConfigOption = Box<dyn FnOnce(&mut ServiceConfig) + Send>;

/// Service configuration built via [`ServiceConfig::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    pub addr: String,
    pub db_uri: String,
    /// Timeout in seconds
    pub timeout: i64,
    pub log_file: String,
}

impl ServiceConfig {
    /// Start from the zero value and apply `opts` in order; later options win.
    pub fn new<I>(opts: I) -> Self
    where
        I: IntoIterator<Item = ConfigOption>,
    {
        let mut config = Self::default();
        for opt in opts {
            opt(&mut config);
        }
        config
    }
}

impl fmt::Display for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "config {{addr:{}, dburi:{}, timeout:{}, logFile:{}}}",
            self.addr, self.db_uri, self.timeout, self.log_file
        )
    }
}

pub fn set_addr(addr: impl Into<String>) -> ConfigOption {
    let addr = addr.into();
    Box::new(move |c: &mut ServiceConfig| c.addr = addr)
}

pub fn set_db_uri(db_uri: impl Into<String>) -> ConfigOption {
    let db_uri = db_uri.into();
    Box::new(move |c: &mut ServiceConfig| c.db_uri = db_uri)
}

pub fn set_timeout(timeout: i64) -> ConfigOption {
    Box::new(move |c: &mut ServiceConfig| c.timeout = timeout)
}

pub fn set_log_file(log_file: impl Into<String>) -> ConfigOption {
    let log_file = log_file.into();
    Box::new(move |c: &mut ServiceConfig| c.log_file = log_file)
}
