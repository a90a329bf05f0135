//! HMAC-SHA256.

use super::{Context, HMAC_SHA256_LEN};
use crate::error::{CryptoError, Result};

#[derive(Debug, Clone)]
pub struct Hmac {
    ctx: Context,
}

impl Hmac {
    pub(crate) fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// HMAC-SHA256 of `message` under `key`, always 32 bytes. Empty
    /// messages and empty keys are accepted.
    pub async fn hmac256(&self, message: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        let (message, key) = (message.to_vec(), key.to_vec());
        let mac = self
            .ctx
            .run("hmac256", move |provider| provider.hmac_sha256(&key, &message))
            .await?;

        if mac.len() != HMAC_SHA256_LEN {
            return Err(CryptoError::Provider(format!(
                "HMAC-SHA256 output has {} bytes",
                mac.len()
            )));
        }
        Ok(mac)
    }

    /// Checks `mac` against HMAC-SHA256 of `message` in constant time.
    pub async fn verify256(&self, message: &[u8], key: &[u8], mac: &[u8]) -> Result<bool> {
        if mac.len() != HMAC_SHA256_LEN {
            return Ok(false);
        }

        let (message, key, mac) = (message.to_vec(), key.to_vec(), mac.to_vec());
        self.ctx
            .run("hmac256_verify", move |provider| {
                provider.hmac_sha256_verify(&key, &message, &mac)
            })
            .await
    }
}
