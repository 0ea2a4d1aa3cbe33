use thiserror::Error;

use crate::models::ContactField;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in all required fields.")]
    MissingFields(Vec<ContactField>),
}

impl ContactError {
    pub fn missing_fields(&self) -> &[ContactField] {
        match self {
            Self::MissingFields(fields) => fields,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load leptos configuration: {0}")]
    Leptos(String),

    #[error("Invalid BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}
