use rand_core::{OsRng, TryRngCore};

use crate::domain::{
    error::DomainError, models::account::ActivationToken,
    services::token_service::ActivationTokenGenerator,
};

const DEFAULT_TOKEN_LENGTH: usize = 16;

/// Hex-encodes OS-level random bytes into a fixed-length token.
#[derive(Clone)]
pub struct HexTokenGenerator {
    length: usize,
}

impl HexTokenGenerator {
    pub fn new() -> Self {
        Self {
            length: DEFAULT_TOKEN_LENGTH,
        }
    }

    pub fn with_length(length: usize) -> Self {
        Self { length }
    }
}

impl Default for HexTokenGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivationTokenGenerator for HexTokenGenerator {
    fn generate(&self) -> Result<ActivationToken, DomainError> {
        let mut bytes = vec![0u8; self.length.div_ceil(2)];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| DomainError::TokenGeneration(e.to_string()))?;

        let mut token = hex::encode(bytes);
        token.truncate(self.length);
        Ok(ActivationToken::new(token))
    }
}
