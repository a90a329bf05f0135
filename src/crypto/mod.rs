//! Engine namespaces of the facade.
//!
//! Every engine validates its inputs on the calling task, copies them into
//! owned buffers and then hands a closure to [`Context::run`], which executes
//! it against the injected provider according to the configured
//! [`Dispatch`] mode.

pub mod aes;
pub mod hmac;
pub mod pbkdf2;
pub mod random;
pub mod rsa;
pub mod sha;

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::{Config, Dispatch};
use crate::error::{CryptoError, Result};
use crate::provider::CryptoProvider;

/// AES block size and the required IV length for CBC.
pub const AES_BLOCK_LEN: usize = 16;
/// Output length of HMAC-SHA256.
pub const HMAC_SHA256_LEN: usize = 32;
/// Bytes of overhead in a PKCS#1 v1.5 block.
pub const PKCS1_OVERHEAD: usize = 11;

/// Provider plus configuration, shared by all engines of one facade.
#[derive(Clone)]
pub(crate) struct Context {
    provider: Arc<dyn CryptoProvider>,
    config: Config,
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("provider", &self.provider.name())
            .field("config", &self.config)
            .finish()
    }
}

impl Context {
    pub(crate) fn new(provider: Arc<dyn CryptoProvider>, config: Config) -> Self {
        Self { provider, config }
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn provider(&self) -> &dyn CryptoProvider {
        self.provider.as_ref()
    }

    /// Runs one provider call. The result is delivered exactly once; a
    /// failing or panicking call only affects its own result.
    pub(crate) async fn run<T, F>(&self, op: &'static str, call: F) -> Result<T>
    where
        F: FnOnce(&dyn CryptoProvider) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        debug!(
            op,
            provider = self.provider.name(),
            dispatch = ?self.config.dispatch(),
            "dispatching"
        );

        let result = match self.config.dispatch() {
            Dispatch::Inline => {
                let provider = self.provider.as_ref();
                panic::catch_unwind(AssertUnwindSafe(|| call(provider)))
                    .unwrap_or_else(|payload| Err(panicked(payload)))
            }
            Dispatch::Blocking => {
                let provider = Arc::clone(&self.provider);
                tokio::task::spawn_blocking(move || call(provider.as_ref())).await?
            }
        };

        match &result {
            Err(err) if err.is_validation() => {
                debug!(op, provider = self.provider.name(), error = %err, "input rejected");
            }
            Err(err) => {
                warn!(op, provider = self.provider.name(), error = %err, "operation failed");
            }
            Ok(_) => {}
        }
        result
    }
}

fn panicked(payload: Box<dyn Any + Send>) -> CryptoError {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    CryptoError::Provider(format!("provider panicked: {message}"))
}
