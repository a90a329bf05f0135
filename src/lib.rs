//! A uniform async API over AES-CBC, RSA, the SHA family, HMAC-SHA256,
//! PBKDF2 and the byte encodings used to move their inputs and outputs
//! around.
//!
//! ```no_run
//! # async fn demo() -> simple_crypto::Result<()> {
//! use simple_crypto::SimpleCrypto;
//!
//! let crypto = SimpleCrypto::new();
//! let key = crypto.random_bytes(32).await?;
//! let iv = crypto.random_bytes(16).await?;
//!
//! let plaintext = crypto.utils().utf8_to_bytes("hello");
//! let ciphertext = crypto.aes().encrypt(&plaintext, &key, &iv).await?;
//! assert_eq!(crypto.aes().decrypt(&ciphertext, &key, &iv).await?, plaintext);
//! # Ok(())
//! # }
//! ```

mod algorithm;
pub mod codec;
mod config;
pub mod crypto;
mod error;
pub mod provider;

use std::sync::Arc;

pub use crate::algorithm::{HashAlgorithm, SignatureHash};
pub use crate::codec::Utils;
pub use crate::config::{Config, Dispatch};
pub use crate::crypto::aes::Aes;
pub use crate::crypto::hmac::Hmac;
pub use crate::crypto::pbkdf2::{DerivationParameters, Pbkdf2, SecretInput};
pub use crate::crypto::random::Random;
pub use crate::crypto::rsa::{KeyPair, Rsa};
pub use crate::crypto::sha::{HashInput, HashOutput, Sha};
pub use crate::error::{CryptoError, Result};
pub use crate::provider::{CryptoProvider, RustCryptoProvider};

use crate::crypto::Context;

/// Entry point holding the injected provider and configuration.
///
/// Cloning is cheap and clones share the provider. The namespace accessors
/// return small owned handles that can be moved into spawned tasks.
#[derive(Debug, Clone)]
pub struct SimpleCrypto {
    ctx: Context,
}

impl Default for SimpleCrypto {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleCrypto {
    /// Facade over [`RustCryptoProvider`] with the default [`Config`].
    pub fn new() -> Self {
        Self::with_provider(Arc::new(RustCryptoProvider::new()), Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_provider(Arc::new(RustCryptoProvider::new()), config)
    }

    pub fn with_provider(provider: Arc<dyn CryptoProvider>, config: Config) -> Self {
        Self {
            ctx: Context::new(provider, config),
        }
    }

    pub fn config(&self) -> &Config {
        self.ctx.config()
    }

    pub fn utils(&self) -> Utils {
        Utils
    }

    pub fn random(&self) -> Random {
        Random::new(self.ctx.clone())
    }

    /// Shorthand for `random().random_bytes(length)`.
    pub async fn random_bytes(&self, length: usize) -> Result<Vec<u8>> {
        self.random().random_bytes(length).await
    }

    pub fn sha(&self) -> Sha {
        Sha::new(self.ctx.clone())
    }

    pub fn aes(&self) -> Aes {
        Aes::new(self.ctx.clone())
    }

    pub fn hmac(&self) -> Hmac {
        Hmac::new(self.ctx.clone())
    }

    pub fn pbkdf2(&self) -> Pbkdf2 {
        Pbkdf2::new(self.ctx.clone())
    }

    pub fn rsa(&self) -> Rsa {
        Rsa::new(self.ctx.clone())
    }
}
