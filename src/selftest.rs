//! Known-answer and round-trip checks over every namespace, one line each.

use std::fmt;

use anyhow::Result;
use simple_crypto::{CryptoError, SimpleCrypto, codec};

const SHA1_TEST: &str = "a94a8fe5ccb19ba61c4c0873d391e987982fbbd3";
const SHA256_TEST: &str = "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08";
const SHA512_TEST_PREFIX: &str = "ee26b0dd4af7e749aa1a8ee3c10ae9923f61898";

pub struct CheckResult {
    section: &'static str,
    name: &'static str,
    passed: bool,
    detail: String,
}

impl CheckResult {
    pub fn passed(&self) -> bool {
        self.passed
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "pass" } else { "fail" };
        write!(f, "{status}  {}/{}: {}", self.section, self.name, self.detail)
    }
}

struct Report {
    section: &'static str,
    results: Vec<CheckResult>,
}

impl Report {
    fn record(&mut self, name: &'static str, outcome: Result<(bool, String)>) {
        let (passed, detail) = outcome.unwrap_or_else(|e| (false, format!("error: {e}")));
        self.results.push(CheckResult {
            section: self.section,
            name,
            passed,
            detail,
        });
    }
}

pub async fn run(crypto: &SimpleCrypto) -> Vec<CheckResult> {
    let mut report = Report {
        section: "utils",
        results: Vec::new(),
    };

    utils(crypto, &mut report).await;
    report.section = "sha";
    sha(crypto, &mut report).await;
    report.section = "aes";
    aes(crypto, &mut report).await;
    report.section = "hmac";
    hmac(crypto, &mut report).await;
    report.section = "pbkdf2";
    pbkdf2(crypto, &mut report).await;
    report.section = "rsa";
    rsa(crypto, &mut report).await;

    report.results
}

async fn utils(crypto: &SimpleCrypto, report: &mut Report) {
    let outcome = async {
        let bytes = crypto.random_bytes(16).await?;
        Ok::<_, anyhow::Error>((bytes.len() == 16, format!("{} bytes", bytes.len())))
    }
    .await;
    report.record("random-bytes-length", outcome);

    let outcome = async {
        let a = crypto.random_bytes(16).await?;
        let b = crypto.random_bytes(16).await?;
        Ok::<_, anyhow::Error>((a != b, "two calls differ".to_string()))
    }
    .await;
    report.record("random-bytes-unique", outcome);

    let utils = crypto.utils();
    let outcome = (|| -> Result<(bool, String)> {
        let original = "Hello, World!";
        let restored = utils.bytes_to_utf8(&utils.utf8_to_bytes(original))?;
        Ok((restored == original, format!("{restored:?}")))
    })();
    report.record("utf8-roundtrip", outcome);

    let outcome = (|| -> Result<(bool, String)> {
        let encoded = utils.bytes_to_base64(b"Base64 test data");
        let decoded = utils.base64_to_bytes(&encoded)?;
        Ok((decoded == b"Base64 test data", encoded))
    })();
    report.record("base64-roundtrip", outcome);

    let outcome = (|| -> Result<(bool, String)> {
        let hex = utils.bytes_to_hex(b"Hex test data");
        let decoded = utils.hex_to_bytes(&hex)?;
        Ok((decoded == b"Hex test data", hex))
    })();
    report.record("hex-roundtrip", outcome);

    let rejected = matches!(utils.hex_to_bytes("abc"), Err(CryptoError::InvalidInput(_)));
    report.record("hex-invalid-odd", Ok((rejected, "odd-length hex".to_string())));
}

async fn sha(crypto: &SimpleCrypto, report: &mut Report) {
    let sha = crypto.sha();

    let outcome = async {
        let digest = sha.sha1("test").await?.to_hex();
        Ok::<_, anyhow::Error>((digest == SHA1_TEST, digest))
    }
    .await;
    report.record("sha1-string", outcome);

    let outcome = async {
        let digest = sha.sha256("test").await?.to_hex();
        Ok::<_, anyhow::Error>((digest == SHA256_TEST, digest))
    }
    .await;
    report.record("sha256-string", outcome);

    let outcome = async {
        let digest = sha.sha512("test").await?.to_hex();
        let passed = digest.starts_with(SHA512_TEST_PREFIX);
        Ok::<_, anyhow::Error>((passed, format!("{}...", &digest[..32])))
    }
    .await;
    report.record("sha512-string", outcome);

    let outcome = async {
        let from_bytes = sha.sha256(b"test").await?.to_hex();
        let detail = "bytes digest matches text digest".to_string();
        Ok::<_, anyhow::Error>((from_bytes == SHA256_TEST, detail))
    }
    .await;
    report.record("sha256-bytes", outcome);
}

async fn aes(crypto: &SimpleCrypto, report: &mut Report) {
    let aes = crypto.aes();

    let outcome = async {
        let key = crypto.random_bytes(32).await?;
        let iv = crypto.random_bytes(16).await?;
        let plaintext = codec::utf8_to_bytes("Hello AES!");
        let ciphertext = aes.encrypt(&plaintext, &key, &iv).await?;
        let decrypted = aes.decrypt(&ciphertext, &key, &iv).await?;
        let detail = format!("{} ciphertext bytes", ciphertext.len());
        Ok::<_, anyhow::Error>((decrypted == plaintext, detail))
    }
    .await;
    report.record("encrypt-decrypt", outcome);

    let outcome = async {
        let key = crypto.random_bytes(32).await?;
        let other = crypto.random_bytes(32).await?;
        let iv = crypto.random_bytes(16).await?;
        let plaintext = codec::utf8_to_bytes("Hello AES!");
        let ciphertext = aes.encrypt(&plaintext, &key, &iv).await?;
        let rejected = match aes.decrypt(&ciphertext, &other, &iv).await {
            Ok(bytes) => bytes != plaintext,
            Err(CryptoError::Decryption(_)) => true,
            Err(e) => return Err(e.into()),
        };
        Ok::<_, anyhow::Error>((rejected, "wrong key does not decrypt".to_string()))
    }
    .await;
    report.record("wrong-key", outcome);
}

async fn hmac(crypto: &SimpleCrypto, report: &mut Report) {
    let hmac = crypto.hmac();

    let outcome = async {
        let mac = hmac.hmac256(b"message", b"key").await?;
        Ok::<_, anyhow::Error>((mac.len() == 32, format!("{} bytes", mac.len())))
    }
    .await;
    report.record("hmac-length", outcome);

    let outcome = async {
        let a = hmac.hmac256(b"message", b"key").await?;
        let b = hmac.hmac256(b"message", b"key").await?;
        let c = hmac.hmac256(b"message", b"other key").await?;
        let detail = "deterministic and key dependent".to_string();
        Ok::<_, anyhow::Error>((a == b && a != c, detail))
    }
    .await;
    report.record("hmac-deterministic", outcome);
}

async fn pbkdf2(crypto: &SimpleCrypto, report: &mut Report) {
    let pbkdf2 = crypto.pbkdf2();

    let outcome = async {
        let key = pbkdf2.hash("password", "salt", 4096, 32, "SHA1").await?;
        let again = pbkdf2.hash("password", "salt", 4096, 32, "SHA1").await?;
        let passed = key.len() == 32 && key == again;
        Ok::<_, anyhow::Error>((passed, codec::bytes_to_hex(&key)))
    }
    .await;
    report.record("pbkdf2-deterministic", outcome);

    let outcome = async {
        let from_text = pbkdf2.hash("password", "salt", 4096, 32, "SHA1").await?;
        let from_bytes = pbkdf2.hash(b"password", b"salt", 4096, 32, "SHA1").await?;
        let detail = "text and bytes inputs agree".to_string();
        Ok::<_, anyhow::Error>((from_text == from_bytes, detail))
    }
    .await;
    report.record("pbkdf2-string-vs-bytes", outcome);

    let outcome = async {
        let sha1 = pbkdf2.hash("password", "salt", 4096, 32, "SHA1").await?;
        let sha256 = pbkdf2.hash("password", "salt", 4096, 32, "SHA256").await?;
        let detail = format!("{}...", &codec::bytes_to_hex(&sha256)[..16]);
        Ok::<_, anyhow::Error>((sha1 != sha256, detail))
    }
    .await;
    report.record("pbkdf2-sha256", outcome);

    let rejected = matches!(
        pbkdf2.hash("password", "salt", 4096, 32, "INVALID").await,
        Err(CryptoError::UnsupportedAlgorithm(_))
    );
    report.record(
        "pbkdf2-invalid-algorithm",
        Ok((rejected, "unknown identifier rejected".to_string())),
    );
}

async fn rsa(crypto: &SimpleCrypto, report: &mut Report) {
    let rsa = crypto.rsa();

    let pair = match rsa.generate_keys(1024).await {
        Ok(pair) => {
            let detail = format!("public key length {}", pair.public().len());
            report.record("keygen", Ok((true, detail)));
            pair
        }
        Err(e) => {
            // every remaining check needs the keys
            report.record("keygen", Err(e.into()));
            return;
        }
    };

    let outcome = async {
        let encrypted = rsa.encrypt("Hello RSA!", pair.public()).await?;
        let decrypted = rsa.decrypt(&encrypted, pair.private()).await?;
        Ok::<_, anyhow::Error>((decrypted == "Hello RSA!", format!("{decrypted:?}")))
    }
    .await;
    report.record("encrypt-decrypt", outcome);

    let outcome = async {
        let signature = rsa.sign("data to be signed", pair.private(), "SHA256").await?;
        let valid = rsa
            .verify("data to be signed", &signature, pair.public(), "SHA256")
            .await?;
        Ok::<_, anyhow::Error>((valid, "signature verified".to_string()))
    }
    .await;
    report.record("sign-verify", outcome);

    let outcome = async {
        let signature = rsa.sign("original data", pair.private(), "SHA256").await?;
        let valid = rsa
            .verify("tampered data", &signature, pair.public(), "SHA256")
            .await?;
        Ok::<_, anyhow::Error>((!valid, "tampered data rejected".to_string()))
    }
    .await;
    report.record("verify-tampered", outcome);
}
