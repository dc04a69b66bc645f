//! Errors raised while writing decorations

use thiserror::Error;

use super::Region;

#[derive(Debug, Error)]
pub enum DecorError {
    /// The chain ran out of providers before reaching content
    #[error("no default page decorations configured for region '{region}'")]
    MissingFallback { region: Region },

    /// The chain is longer than any sane configuration, most likely a cycle
    #[error("page decoration chain for region '{region}' is longer than {max} providers")]
    ChainTooDeep { region: Region, max: usize },

    /// The output sink failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DecorError {
    /// True for configuration mistakes, false for sink failures
    pub fn is_configuration(&self) -> bool {
        !matches!(self, DecorError::Io(_))
    }
}
