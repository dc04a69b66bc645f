//! Errors raised while resolving map providers

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// No constructor is registered under the qualified name
    #[error("unknown map provider '{name}'")]
    Unknown { name: String },

    /// The constructor ran but could not build the provider
    #[error("map provider '{name}' failed to initialize: {reason}")]
    Construction { name: String, reason: String },
}

impl ProviderError {
    pub fn construction(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Construction {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
