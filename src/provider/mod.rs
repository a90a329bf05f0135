//! The seam between the contract layer and the code that does the actual
//! primitive math.
//!
//! Engines validate their inputs and then issue one or more calls on a
//! [`CryptoProvider`] with primitive parameters. A provider is injected into
//! [`crate::SimpleCrypto`] at construction; there is no global registry.

mod rustcrypto;

pub use rustcrypto::RustCryptoProvider;

use crate::algorithm::{HashAlgorithm, SignatureHash};
use crate::crypto::rsa::KeyPair;
use crate::error::Result;

/// Primitive cryptographic operations.
///
/// Implementations must be safe to call concurrently from several worker
/// threads and must not keep per-call state between invocations. Inputs have
/// already passed the engine's validation, but a provider still reports its
/// own failures as errors rather than panicking.
pub trait CryptoProvider: Send + Sync {
    /// Short identifier used in log output.
    fn name(&self) -> &'static str;

    /// Fills `buf` from a cryptographically secure source.
    fn fill_random(&self, buf: &mut [u8]) -> Result<()>;

    fn digest(&self, algorithm: HashAlgorithm, data: &[u8]) -> Result<Vec<u8>>;

    /// AES-CBC with PKCS#7 padding. The key size selects AES-128/192/256.
    fn aes_cbc_encrypt(&self, key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>;

    fn aes_cbc_decrypt(&self, key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>;

    fn hmac_sha256(&self, key: &[u8], message: &[u8]) -> Result<Vec<u8>>;

    /// Constant-time check of `mac` against HMAC-SHA256(key, message).
    fn hmac_sha256_verify(&self, key: &[u8], message: &[u8], mac: &[u8]) -> Result<bool>;

    /// PBKDF2-HMAC, filling all of `out`.
    fn pbkdf2(
        &self,
        algorithm: HashAlgorithm,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        out: &mut [u8],
    ) -> Result<()>;

    fn rsa_generate(&self, bits: usize) -> Result<KeyPair>;

    /// Modulus size in bytes of an encoded public or private key.
    fn rsa_key_size(&self, key: &str) -> Result<usize>;

    /// Fails with [`InvalidInput`](crate::CryptoError::InvalidInput) when
    /// `plaintext` does not fit in one PKCS#1 v1.5 block of the key.
    fn rsa_encrypt(&self, public_key: &str, plaintext: &[u8]) -> Result<Vec<u8>>;

    fn rsa_decrypt(&self, private_key: &str, ciphertext: &[u8]) -> Result<Vec<u8>>;

    /// With [`SignatureHash::Raw`], fails with
    /// [`InvalidInput`](crate::CryptoError::InvalidInput) when `data` does not
    /// fit in one PKCS#1 v1.5 block of the key.
    fn rsa_sign(&self, private_key: &str, hash: SignatureHash, data: &[u8]) -> Result<Vec<u8>>;

    /// Returns `Ok(false)` for any signature that does not match.
    fn rsa_verify(
        &self,
        public_key: &str,
        hash: SignatureHash,
        data: &[u8],
        signature: &[u8],
    ) -> Result<bool>;
}
