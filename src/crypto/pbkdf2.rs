//! PBKDF2-HMAC key derivation.

use tracing::warn;
use zeroize::Zeroizing;

use super::Context;
use crate::algorithm::HashAlgorithm;
use crate::error::{CryptoError, Result};

/// Password or salt, given either as text or as raw bytes.
///
/// Text is always interpreted as its UTF-8 encoding, so `"salt"` and
/// `b"salt"` derive the same key.
#[derive(Clone, PartialEq, Eq)]
pub enum SecretInput {
    Text(Zeroizing<String>),
    Bytes(Zeroizing<Vec<u8>>),
}

impl SecretInput {
    fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        match self {
            SecretInput::Text(text) => Zeroizing::new(text.as_bytes().to_vec()),
            SecretInput::Bytes(bytes) => bytes.clone(),
        }
    }
}

impl std::fmt::Debug for SecretInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecretInput::Text(_) => f.write_str("SecretInput::Text(..)"),
            SecretInput::Bytes(b) => write!(f, "SecretInput::Bytes({} bytes)", b.len()),
        }
    }
}

impl From<&str> for SecretInput {
    fn from(value: &str) -> Self {
        SecretInput::Text(Zeroizing::new(value.to_owned()))
    }
}

impl From<String> for SecretInput {
    fn from(value: String) -> Self {
        SecretInput::Text(Zeroizing::new(value))
    }
}

impl From<Zeroizing<String>> for SecretInput {
    fn from(value: Zeroizing<String>) -> Self {
        SecretInput::Text(value)
    }
}

impl From<&[u8]> for SecretInput {
    fn from(value: &[u8]) -> Self {
        SecretInput::Bytes(Zeroizing::new(value.to_vec()))
    }
}

impl<const N: usize> From<&[u8; N]> for SecretInput {
    fn from(value: &[u8; N]) -> Self {
        SecretInput::Bytes(Zeroizing::new(value.to_vec()))
    }
}

impl From<Vec<u8>> for SecretInput {
    fn from(value: Vec<u8>) -> Self {
        SecretInput::Bytes(Zeroizing::new(value))
    }
}

#[derive(Debug, Clone)]
pub struct DerivationParameters {
    password: SecretInput,
    salt: SecretInput,
    iterations: u32,
    key_length: usize,
    algorithm: HashAlgorithm,
}

impl DerivationParameters {
    pub fn new(
        password: impl Into<SecretInput>,
        salt: impl Into<SecretInput>,
        iterations: u32,
        key_length: usize,
        algorithm: HashAlgorithm,
    ) -> Result<Self> {
        let params = Self {
            password: password.into(),
            salt: salt.into(),
            iterations,
            key_length,
            algorithm,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn key_length(&self) -> usize {
        self.key_length
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations < 1 {
            return Err(CryptoError::InvalidInput(
                "PBKDF2 iterations must be >= 1".into(),
            ));
        }
        if self.key_length < 1 {
            return Err(CryptoError::InvalidInput(
                "PBKDF2 key length must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Pbkdf2 {
    ctx: Context,
}

impl Pbkdf2 {
    pub(crate) fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// Derives `key_length` bytes from `password` and `salt`.
    ///
    /// `algorithm` is a hash identifier such as `"SHA1"` or `"SHA-256"`.
    ///
    /// # Errors
    ///
    /// [`CryptoError::UnsupportedAlgorithm`] for an unknown identifier,
    /// [`CryptoError::InvalidInput`] for zero iterations or zero length.
    pub async fn hash(
        &self,
        password: impl Into<SecretInput>,
        salt: impl Into<SecretInput>,
        iterations: u32,
        key_length: usize,
        algorithm: &str,
    ) -> Result<Vec<u8>> {
        let algorithm: HashAlgorithm = algorithm.parse().inspect_err(|e| {
            warn!(error = %e, "rejected PBKDF2 hash identifier");
        })?;
        let params = DerivationParameters::new(password, salt, iterations, key_length, algorithm)?;
        self.derive(&params).await
    }

    pub async fn derive(&self, params: &DerivationParameters) -> Result<Vec<u8>> {
        params.validate()?;

        let password = params.password.to_bytes();
        let salt = params.salt.to_bytes();
        let (algorithm, iterations, key_length) =
            (params.algorithm, params.iterations, params.key_length);

        let key = self
            .ctx
            .run("pbkdf2", move |provider| {
                let mut out = Zeroizing::new(vec![0u8; key_length]);
                provider.pbkdf2(algorithm, &password, &salt, iterations, &mut out)?;
                Ok(out)
            })
            .await?;

        Ok(key.to_vec())
    }
}
