//! Secure random byte generation.

use super::Context;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Random {
    ctx: Context,
}

impl Random {
    pub(crate) fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// Returns `length` bytes from the provider's CSPRNG.
    ///
    /// A zero length returns an empty buffer without touching the provider.
    pub async fn random_bytes(&self, length: usize) -> Result<Vec<u8>> {
        if length == 0 {
            return Ok(Vec::new());
        }

        self.ctx
            .run("random_bytes", move |provider| {
                let mut buf = vec![0u8; length];
                provider.fill_random(&mut buf)?;
                Ok(buf)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::SimpleCrypto;

    #[tokio::test]
    async fn random_bytes_has_requested_length() {
        let crypto = SimpleCrypto::new();
        for len in [1, 16, 32, 64, 128, 1000] {
            assert_eq!(crypto.random().random_bytes(len).await.unwrap().len(), len);
        }
    }

    #[tokio::test]
    async fn zero_length_is_empty() {
        let crypto = SimpleCrypto::new();
        assert!(crypto.random().random_bytes(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn two_calls_differ() {
        let crypto = SimpleCrypto::new();
        let a = crypto.random().random_bytes(16).await.unwrap();
        let b = crypto.random().random_bytes(16).await.unwrap();
        assert_ne!(a, b);
    }
}
