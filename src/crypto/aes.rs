//! AES in CBC mode with PKCS#7 padding.

use super::{AES_BLOCK_LEN, Context};
use crate::error::{CryptoError, Result};

/// Accepted key sizes in bytes, for AES-128, AES-192 and AES-256.
pub const AES_KEY_LENS: [usize; 3] = [16, 24, 32];

fn check_key(key: &[u8]) -> Result<()> {
    if !AES_KEY_LENS.contains(&key.len()) {
        return Err(CryptoError::InvalidKey(format!(
            "AES key must be 16, 24 or 32 bytes, got {}",
            key.len()
        )));
    }
    Ok(())
}

fn check_iv(iv: &[u8]) -> Result<()> {
    if iv.len() != AES_BLOCK_LEN {
        return Err(CryptoError::InvalidInput(format!(
            "AES-CBC IV must be {AES_BLOCK_LEN} bytes, got {}",
            iv.len()
        )));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct Aes {
    ctx: Context,
}

impl Aes {
    pub(crate) fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// Encrypts `plaintext`. The result is always a non-empty multiple of
    /// the block size; empty plaintext yields one padding block.
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidKey`] for a key that is not 16, 24 or 32 bytes,
    /// [`CryptoError::InvalidInput`] for an IV that is not 16 bytes.
    pub async fn encrypt(&self, plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        check_key(key)?;
        check_iv(iv)?;

        let (plaintext, key, iv) = (plaintext.to_vec(), key.to_vec(), iv.to_vec());
        let ciphertext = self
            .ctx
            .run("aes_encrypt", move |provider| {
                provider.aes_cbc_encrypt(&key, &iv, &plaintext)
            })
            .await?;

        if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_LEN != 0 {
            return Err(CryptoError::Provider(format!(
                "AES-CBC ciphertext of {} bytes is not block aligned",
                ciphertext.len()
            )));
        }
        Ok(ciphertext)
    }

    /// Decrypts `ciphertext`.
    ///
    /// # Errors
    ///
    /// Besides the key and IV checks of [`Aes::encrypt`], a ciphertext that is
    /// empty or not block aligned is [`CryptoError::InvalidInput`]. Bad
    /// padding, the usual symptom of a wrong key or IV, is
    /// [`CryptoError::Decryption`].
    pub async fn decrypt(&self, ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        check_key(key)?;
        check_iv(iv)?;
        if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_LEN != 0 {
            return Err(CryptoError::InvalidInput(format!(
                "AES-CBC ciphertext must be a non-empty multiple of {AES_BLOCK_LEN} bytes, got {}",
                ciphertext.len()
            )));
        }

        let (ciphertext, key, iv) = (ciphertext.to_vec(), key.to_vec(), iv.to_vec());
        self.ctx
            .run("aes_decrypt", move |provider| {
                provider.aes_cbc_decrypt(&key, &iv, &ciphertext)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimpleCrypto;
    use crate::codec::{bytes_to_utf8_lossy, utf8_to_bytes};

    const IV: [u8; 16] = [7u8; 16];

    #[tokio::test]
    async fn roundtrip_all_key_sizes() {
        let aes = SimpleCrypto::new().aes();
        let plaintext = utf8_to_bytes("Hello AES-CBC, more than one block of text!");

        for len in AES_KEY_LENS {
            let key = vec![0x42u8; len];
            let ciphertext = aes.encrypt(&plaintext, &key, &IV).await.unwrap();
            assert_eq!(ciphertext.len() % 16, 0);
            assert_ne!(ciphertext, plaintext);

            let decrypted = aes.decrypt(&ciphertext, &key, &IV).await.unwrap();
            assert_eq!(decrypted, plaintext, "AES-{}", len * 8);
        }
    }

    #[tokio::test]
    async fn empty_plaintext_is_one_block() {
        let aes = SimpleCrypto::new().aes();
        let key = [1u8; 32];
        let ciphertext = aes.encrypt(&[], &key, &IV).await.unwrap();
        assert_eq!(ciphertext.len(), 16);
        assert!(aes.decrypt(&ciphertext, &key, &IV).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn wrong_key_never_reproduces_plaintext() {
        let aes = SimpleCrypto::new().aes();
        let plaintext = utf8_to_bytes("attack at dawn");
        let ciphertext = aes.encrypt(&plaintext, &[1u8; 32], &IV).await.unwrap();

        match aes.decrypt(&ciphertext, &[2u8; 32], &IV).await {
            Err(CryptoError::Decryption(_)) => {}
            Ok(bytes) => assert_ne!(bytes_to_utf8_lossy(&bytes), "attack at dawn"),
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn wrong_iv_never_reproduces_plaintext() {
        let aes = SimpleCrypto::new().aes();
        let plaintext = utf8_to_bytes("attack at dawn");
        let key = [1u8; 16];
        let ciphertext = aes.encrypt(&plaintext, &key, &IV).await.unwrap();

        match aes.decrypt(&ciphertext, &key, &[9u8; 16]).await {
            Err(CryptoError::Decryption(_)) => {}
            Ok(bytes) => assert_ne!(bytes, plaintext),
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn bad_key_length_is_invalid_key() {
        let aes = SimpleCrypto::new().aes();
        for len in [0, 15, 17, 31, 64] {
            let result = aes.encrypt(b"data", &vec![0u8; len], &IV).await;
            assert!(matches!(result, Err(CryptoError::InvalidKey(_))), "len {len}");
        }
    }

    #[tokio::test]
    async fn bad_iv_length_is_invalid_input() {
        let aes = SimpleCrypto::new().aes();
        let result = aes.encrypt(b"data", &[0u8; 16], &[0u8; 12]).await;
        assert!(matches!(result, Err(CryptoError::InvalidInput(_))));

        let result = aes.decrypt(&[0u8; 16], &[0u8; 16], &[]).await;
        assert!(matches!(result, Err(CryptoError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn unaligned_ciphertext_is_invalid_input() {
        let aes = SimpleCrypto::new().aes();
        for len in [0, 15, 17] {
            let result = aes.decrypt(&vec![0u8; len], &[0u8; 16], &IV).await;
            assert!(matches!(result, Err(CryptoError::InvalidInput(_))), "len {len}");
        }
    }
}
