//! Abstract factory: auth providers producing customers and sellers.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};

/// A buyer created by an auth provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
}

impl Customer {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer: {}", self.name)
    }
}

/// A seller created by an auth provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seller {
    pub name: String,
}

impl Seller {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl fmt::Display for Seller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seller: {}", self.name)
    }
}

/// Known auth providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Google,
    Yandex,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::Google, Provider::Yandex];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Yandex => "yandex",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Provider::Google => "Google",
            Provider::Yandex => "Yandex",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(Provider::Google),
            "yandex" => Ok(Provider::Yandex),
            _ => Err(DomainError::UnknownProvider(s.to_string())),
        }
    }
}

/// Factory interface: each provider creates its own family of entities.
pub trait AuthProvider: Send + Sync {
    fn new_customer(&self) -> Customer;
    fn new_seller(&self) -> Seller;
    fn kind(&self) -> Provider;
}

#[derive(Debug, Default)]
pub struct GoogleAuth;

impl AuthProvider for GoogleAuth {
    fn new_customer(&self) -> Customer {
        let mut customer = Customer::default();
        customer.set_name(format!("{} Customer", self.kind().label()));
        customer
    }

    fn new_seller(&self) -> Seller {
        let mut seller = Seller::default();
        seller.set_name(format!("{} Seller", self.kind().label()));
        seller
    }

    fn kind(&self) -> Provider {
        Provider::Google
    }
}

#[derive(Debug, Default)]
pub struct YandexAuth;

impl AuthProvider for YandexAuth {
    fn new_customer(&self) -> Customer {
        let mut customer = Customer::default();
        customer.set_name(format!("{} Customer", self.kind().label()));
        customer
    }

    fn new_seller(&self) -> Seller {
        let mut seller = Seller::default();
        seller.set_name(format!("{} Seller", self.kind().label()));
        seller
    }

    fn kind(&self) -> Provider {
        Provider::Yandex
    }
}

/// Select a provider by name. Unknown names are rejected, never defaulted.
#[instrument(level = "debug")]
pub fn auth_factory(provider: &str) -> DomainResult<Box<dyn AuthProvider>> {
    let provider: Provider = provider.parse()?;
    debug!(%provider, "selected auth provider");
    Ok(match provider {
        Provider::Google => Box::new(GoogleAuth),
        Provider::Yandex => Box::new(YandexAuth),
    })
}
