use anyhow::bail;
use serde::Deserialize;

/// Where provider work runs once an operation has passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dispatch {
    /// On tokio's blocking worker pool.
    #[default]
    Blocking,
    /// On the task that awaits the operation.
    Inline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    dispatch: Dispatch,
    // caller policy, the crate itself imposes no floor
    min_rsa_key_bits: Option<usize>,
}

impl Config {
    pub fn new(dispatch: Dispatch, min_rsa_key_bits: Option<usize>) -> anyhow::Result<Self> {
        let config = Self {
            dispatch,
            min_rsa_key_bits,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn dispatch(&self) -> Dispatch {
        self.dispatch
    }

    pub fn min_rsa_key_bits(&self) -> Option<usize> {
        self.min_rsa_key_bits
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.min_rsa_key_bits == Some(0) {
            bail!("minimum RSA key size must be at least 1 bit");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_blocking_pool_without_floor() {
        let config = Config::default();
        assert_eq!(config.dispatch(), Dispatch::Blocking);
        assert_eq!(config.min_rsa_key_bits(), None);
    }

    #[test]
    fn zero_floor_is_rejected() {
        assert!(Config::new(Dispatch::Inline, Some(0)).is_err());
        assert!(Config::new(Dispatch::Inline, Some(2048)).is_ok());
    }

    #[test]
    fn deserializes_partial_config() {
        let config: Config = serde_json::from_str(r#"{"dispatch":"inline"}"#).unwrap();
        assert_eq!(config.dispatch(), Dispatch::Inline);
        assert_eq!(config.min_rsa_key_bits(), None);

        let config: Config = serde_json::from_str(r#"{"min_rsa_key_bits":2048}"#).unwrap();
        assert_eq!(config.dispatch(), Dispatch::Blocking);
        assert_eq!(config.min_rsa_key_bits(), Some(2048));
    }
}
