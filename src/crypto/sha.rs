//! SHA family digests.
//!
//! Text input produces a lowercase hex digest, byte input produces the raw
//! digest. The two modes are available as explicitly named methods
//! ([`Sha::hash_string`], [`Sha::hash_bytes`]) and through the
//! [`HashInput`] / [`HashOutput`] pair, where the output variant always
//! mirrors the input variant.

use tracing::warn;

use super::Context;
use crate::algorithm::HashAlgorithm;
use crate::codec;
use crate::error::{CryptoError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashInput {
    Text(String),
    Bytes(Vec<u8>),
}

impl From<&str> for HashInput {
    fn from(value: &str) -> Self {
        HashInput::Text(value.to_owned())
    }
}

impl From<String> for HashInput {
    fn from(value: String) -> Self {
        HashInput::Text(value)
    }
}

impl From<&[u8]> for HashInput {
    fn from(value: &[u8]) -> Self {
        HashInput::Bytes(value.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for HashInput {
    fn from(value: &[u8; N]) -> Self {
        HashInput::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for HashInput {
    fn from(value: Vec<u8>) -> Self {
        HashInput::Bytes(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashOutput {
    /// Lowercase hex digest, produced for [`HashInput::Text`].
    Hex(String),
    /// Raw digest, produced for [`HashInput::Bytes`].
    Bytes(Vec<u8>),
}

impl HashOutput {
    pub fn as_hex(&self) -> Option<&str> {
        match self {
            HashOutput::Hex(hex) => Some(hex),
            HashOutput::Bytes(_) => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            HashOutput::Hex(_) => None,
            HashOutput::Bytes(bytes) => Some(bytes),
        }
    }

    /// Hex rendering of either variant.
    pub fn to_hex(&self) -> String {
        match self {
            HashOutput::Hex(hex) => hex.clone(),
            HashOutput::Bytes(bytes) => codec::bytes_to_hex(bytes),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Sha {
    ctx: Context,
}

impl Sha {
    pub(crate) fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// Digest of the UTF-8 bytes of `text`, as lowercase hex.
    pub async fn hash_string(&self, algorithm: HashAlgorithm, text: &str) -> Result<String> {
        let digest = self.hash_bytes(algorithm, text.as_bytes()).await?;
        Ok(codec::bytes_to_hex(&digest))
    }

    /// Raw digest of `data`. Its length is always `algorithm.digest_len()`.
    pub async fn hash_bytes(&self, algorithm: HashAlgorithm, data: &[u8]) -> Result<Vec<u8>> {
        let data = data.to_vec();
        let digest = self
            .ctx
            .run("sha", move |provider| provider.digest(algorithm, &data))
            .await?;

        if digest.len() != algorithm.digest_len() {
            return Err(CryptoError::Provider(format!(
                "{algorithm} digest has {} bytes, expected {}",
                digest.len(),
                algorithm.digest_len()
            )));
        }
        Ok(digest)
    }

    pub async fn digest(
        &self,
        algorithm: HashAlgorithm,
        input: impl Into<HashInput>,
    ) -> Result<HashOutput> {
        match input.into() {
            HashInput::Text(text) => self.hash_string(algorithm, &text).await.map(HashOutput::Hex),
            HashInput::Bytes(bytes) => self
                .hash_bytes(algorithm, &bytes)
                .await
                .map(HashOutput::Bytes),
        }
    }

    /// Like [`Sha::digest`], with the algorithm chosen by identifier.
    pub async fn hash_named(
        &self,
        algorithm: &str,
        input: impl Into<HashInput>,
    ) -> Result<HashOutput> {
        let algorithm: HashAlgorithm = algorithm.parse().inspect_err(|e| {
            warn!(error = %e, "rejected hash identifier");
        })?;
        self.digest(algorithm, input).await
    }

    pub async fn sha1(&self, input: impl Into<HashInput>) -> Result<HashOutput> {
        self.digest(HashAlgorithm::Sha1, input).await
    }

    pub async fn sha224(&self, input: impl Into<HashInput>) -> Result<HashOutput> {
        self.digest(HashAlgorithm::Sha224, input).await
    }

    pub async fn sha256(&self, input: impl Into<HashInput>) -> Result<HashOutput> {
        self.digest(HashAlgorithm::Sha256, input).await
    }

    pub async fn sha384(&self, input: impl Into<HashInput>) -> Result<HashOutput> {
        self.digest(HashAlgorithm::Sha384, input).await
    }

    pub async fn sha512(&self, input: impl Into<HashInput>) -> Result<HashOutput> {
        self.digest(HashAlgorithm::Sha512, input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimpleCrypto;

    #[tokio::test]
    async fn sha1_known_vector() {
        let sha = SimpleCrypto::new().sha();
        let out = sha.sha1("test").await.unwrap();
        assert_eq!(
            out.as_hex(),
            Some("a94a8fe5ccb19ba61c4c0873d391e987982fbbd3")
        );
    }

    #[tokio::test]
    async fn sha256_known_vector() {
        let sha = SimpleCrypto::new().sha();
        let out = sha.sha256("test").await.unwrap();
        let hex = out.as_hex().unwrap();
        assert_eq!(hex.len(), 64);
        assert_eq!(
            hex,
            "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
        );
    }

    #[tokio::test]
    async fn sha512_known_vector_prefix() {
        let sha = SimpleCrypto::new().sha();
        let out = sha.sha512("test").await.unwrap();
        let hex = out.as_hex().unwrap();
        assert_eq!(hex.len(), 128);
        assert!(hex.starts_with("ee26b0dd4af7e749aa1a8ee3c10ae9923f61898"));
    }

    #[tokio::test]
    async fn output_variant_mirrors_input_variant() {
        let sha = SimpleCrypto::new().sha();

        let text = sha.sha256("test").await.unwrap();
        assert!(matches!(text, HashOutput::Hex(_)));

        let bytes = sha.sha256(b"test").await.unwrap();
        assert!(matches!(bytes, HashOutput::Bytes(_)));
    }

    #[tokio::test]
    async fn string_and_bytes_digests_agree() {
        let sha = SimpleCrypto::new().sha();
        for alg in HashAlgorithm::ALL {
            let from_text = sha.hash_string(alg, "test").await.unwrap();
            let from_bytes = sha.hash_bytes(alg, b"test").await.unwrap();
            assert_eq!(from_text, codec::bytes_to_hex(&from_bytes), "{alg}");
            assert_eq!(from_bytes.len(), alg.digest_len(), "{alg}");
        }
    }

    #[tokio::test]
    async fn empty_input_hashes() {
        let sha = SimpleCrypto::new().sha();
        let out = sha.sha1("").await.unwrap();
        assert_eq!(
            out.as_hex(),
            Some("da39a3ee5e6b4b0d3255bfef95601890afd80709")
        );
        let out = sha.sha256(Vec::<u8>::new()).await.unwrap();
        assert_eq!(out.as_bytes().map(<[u8]>::len), Some(32));
    }

    #[tokio::test]
    async fn hash_named_accepts_dashed_identifier() {
        let sha = SimpleCrypto::new().sha();
        let named = sha.hash_named("SHA-256", "test").await.unwrap();
        let direct = sha.sha256("test").await.unwrap();
        assert_eq!(named, direct);
    }

    #[tokio::test]
    async fn hash_named_rejects_unknown_identifier() {
        let sha = SimpleCrypto::new().sha();
        match sha.hash_named("MD5", "test").await {
            Err(CryptoError::UnsupportedAlgorithm(name)) => assert_eq!(name, "MD5"),
            other => panic!("expected UnsupportedAlgorithm, got: {other:?}"),
        }
    }

    #[test]
    fn to_hex_renders_both_variants() {
        assert_eq!(HashOutput::Bytes(vec![0xde, 0xad]).to_hex(), "dead");
        assert_eq!(HashOutput::Hex("beef".into()).to_hex(), "beef");
    }
}
