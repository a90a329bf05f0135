use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
mod auth;
mod selftest;
use simple_crypto::{Config, Dispatch, SimpleCrypto, codec};

#[derive(Debug, clap::Args)]
struct RuntimeArgs {
    /// Run provider calls on the calling task instead of the blocking pool
    #[arg(long, global = true, env = "SIMPLE_CRYPTO_INLINE")]
    inline: bool,

    /// Refuse to generate RSA keys smaller than this many bits
    #[arg(long = "min-rsa-bits", global = true, env = "SIMPLE_CRYPTO_MIN_RSA_BITS")]
    min_rsa_bits: Option<usize>,
}

impl RuntimeArgs {
    fn to_config(&self) -> anyhow::Result<Config> {
        let dispatch = if self.inline {
            Dispatch::Inline
        } else {
            Dispatch::Blocking
        };
        Config::new(dispatch, self.min_rsa_bits)
    }
}

#[derive(Debug, Parser)]
#[command(name = "simple-crypto")]
#[command(
    version,
    about = "AES, RSA, SHA, HMAC and PBKDF2 from the command line."
)]
struct Cli {
    #[command(flatten)]
    runtime: RuntimeArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Prints LEN secure random bytes as hex
    #[command(arg_required_else_help = true)]
    Random { len: usize },

    /// Hashes TEXT and prints the hex digest
    #[command(arg_required_else_help = true)]
    Sha {
        /// SHA1, SHA224, SHA256, SHA384 or SHA512
        algorithm: String,
        text: String,
    },

    /// Encrypts TEXT with AES-CBC and prints base64
    #[command(arg_required_else_help = true)]
    AesEncrypt {
        /// Hex key of 16, 24 or 32 bytes
        #[arg(long)]
        key: String,
        /// Hex IV of 16 bytes
        #[arg(long)]
        iv: String,
        text: String,
    },

    /// Decrypts base64 CIPHERTEXT with AES-CBC and prints the text
    #[command(arg_required_else_help = true)]
    AesDecrypt {
        #[arg(long)]
        key: String,
        #[arg(long)]
        iv: String,
        ciphertext: String,
    },

    /// Prints the hex HMAC-SHA256 of TEXT
    #[command(arg_required_else_help = true)]
    Hmac {
        /// Hex key
        #[arg(long)]
        key: String,
        text: String,
    },

    /// Derives a key with PBKDF2 and prints it as hex
    Pbkdf2 {
        #[arg(long)]
        salt: String,
        #[arg(long, default_value_t = 10_000)]
        iterations: u32,
        /// Output length in bytes
        #[arg(long, default_value_t = 32)]
        length: usize,
        #[arg(long, default_value = "SHA256")]
        algorithm: String,
        /// Read from SIMPLE_CRYPTO_PASSWORD, stdin or a prompt when omitted
        password: Option<String>,
    },

    /// Generates an RSA key pair and prints it as JSON
    RsaKeygen {
        #[arg(long, default_value_t = 2048)]
        bits: usize,
    },

    /// Runs one check per namespace and reports pass/fail
    SelfTest,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let crypto = SimpleCrypto::with_config(args.runtime.to_config()?);

    match args.command {
        Commands::Random { len } => {
            let bytes = crypto.random_bytes(len).await?;
            println!("{}", codec::bytes_to_hex(&bytes));
        }
        Commands::Sha { algorithm, text } => {
            let digest = crypto.sha().hash_named(&algorithm, text).await?;
            println!("{}", digest.to_hex());
        }
        Commands::AesEncrypt { key, iv, text } => {
            let key = codec::hex_to_bytes(&key).context("invalid --key")?;
            let iv = codec::hex_to_bytes(&iv).context("invalid --iv")?;
            let ciphertext = crypto
                .aes()
                .encrypt(&codec::utf8_to_bytes(&text), &key, &iv)
                .await?;
            println!("{}", codec::bytes_to_base64(&ciphertext));
        }
        Commands::AesDecrypt {
            key,
            iv,
            ciphertext,
        } => {
            let key = codec::hex_to_bytes(&key).context("invalid --key")?;
            let iv = codec::hex_to_bytes(&iv).context("invalid --iv")?;
            let ciphertext = codec::base64_to_bytes(&ciphertext).context("invalid ciphertext")?;
            let plaintext = crypto.aes().decrypt(&ciphertext, &key, &iv).await?;
            println!("{}", codec::bytes_to_utf8_lossy(&plaintext));
        }
        Commands::Hmac { key, text } => {
            let key = codec::hex_to_bytes(&key).context("invalid --key")?;
            let mac = crypto.hmac().hmac256(text.as_bytes(), &key).await?;
            println!("{}", codec::bytes_to_hex(&mac));
        }
        Commands::Pbkdf2 {
            salt,
            iterations,
            length,
            algorithm,
            password,
        } => {
            let password = match password {
                Some(pw) => zeroize::Zeroizing::new(pw),
                None => auth::read_password()?,
            };
            let key = zeroize::Zeroizing::new(
                crypto
                    .pbkdf2()
                    .hash(password, salt, iterations, length, &algorithm)
                    .await?,
            );
            println!("{}", codec::bytes_to_hex(&key));
        }
        Commands::RsaKeygen { bits } => {
            let pair = crypto.rsa().generate_keys(bits).await?;
            println!("{}", serde_json::to_string_pretty(&pair)?);
        }
        Commands::SelfTest => {
            let results = selftest::run(&crypto).await;
            let mut failed = 0;
            for result in &results {
                println!("{result}");
                if !result.passed() {
                    failed += 1;
                }
            }
            if failed > 0 {
                anyhow::bail!("{failed} of {} self-test checks failed", results.len());
            }
            println!("all {} checks passed", results.len());
        }
    }

    Ok(())
}
