use crate::error::{IndexError, IndexResult};

pub const DEFAULT_COLLECTION: &str = "se_flows";
pub const DEFAULT_VECTOR_SIZE: u64 = 1024;

/// Qdrant connection and collection configuration.
///
/// Built once at startup and passed by reference; components never read
/// the environment at call time.
#[derive(Debug, Clone)]
pub struct QdrantConfig {
    pub url: String,
    pub api_key: String,
    pub collection: String,
    pub vector_size: u64,
    pub timeout_secs: u64,
}

impl QdrantConfig {
    /// Load from environment variables.
    ///
    /// `QDRANT_URL` and `QDRANT_API_KEY` are required; `QDRANT_COLLECTION`
    /// defaults to "se_flows", `QDRANT_VECTOR_SIZE` to 1024 and
    /// `QDRANT_TIMEOUT_SECS` to 30.
    pub fn from_env() -> IndexResult<Self> {
        let url = required("QDRANT_URL")?;
        let api_key = required("QDRANT_API_KEY")?;

        let collection = std::env::var("QDRANT_COLLECTION")
            .unwrap_or_else(|_| DEFAULT_COLLECTION.to_string());

        let vector_size = optional_parsed("QDRANT_VECTOR_SIZE", DEFAULT_VECTOR_SIZE)?;
        let timeout_secs = optional_parsed("QDRANT_TIMEOUT_SECS", 30)?;

        Ok(Self {
            url,
            api_key,
            collection,
            vector_size,
            timeout_secs,
        })
    }
}

fn required(key: &str) -> IndexResult<String> {
    std::env::var(key)
        .map_err(|_| IndexError::Config(format!("missing environment variable: {}", key)))
}

fn optional_parsed(key: &str, default: u64) -> IndexResult<u64> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| IndexError::Config(format!("invalid {}: {}", key, e))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_requires_url_and_api_key() {
        temp_env::with_vars(
            [
                ("QDRANT_URL", None::<&str>),
                ("QDRANT_API_KEY", Some("key")),
            ],
            || {
                let err = QdrantConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("QDRANT_URL"));
            },
        );

        temp_env::with_vars(
            [
                ("QDRANT_URL", Some("http://localhost:6334")),
                ("QDRANT_API_KEY", None::<&str>),
            ],
            || {
                let err = QdrantConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("QDRANT_API_KEY"));
            },
        );
    }

    #[test]
    fn from_env_applies_defaults() {
        temp_env::with_vars(
            [
                ("QDRANT_URL", Some("http://localhost:6334")),
                ("QDRANT_API_KEY", Some("key")),
                ("QDRANT_COLLECTION", None),
                ("QDRANT_VECTOR_SIZE", None),
                ("QDRANT_TIMEOUT_SECS", None),
            ],
            || {
                let config = QdrantConfig::from_env().unwrap();
                assert_eq!(config.collection, "se_flows");
                assert_eq!(config.vector_size, 1024);
                assert_eq!(config.timeout_secs, 30);
            },
        );
    }

    #[test]
    fn from_env_reads_overrides() {
        temp_env::with_vars(
            [
                ("QDRANT_URL", Some("http://qdrant:6334")),
                ("QDRANT_API_KEY", Some("key")),
                ("QDRANT_COLLECTION", Some("my_flows")),
                ("QDRANT_VECTOR_SIZE", Some("768")),
            ],
            || {
                let config = QdrantConfig::from_env().unwrap();
                assert_eq!(config.collection, "my_flows");
                assert_eq!(config.vector_size, 768);
            },
        );
    }

    #[test]
    fn from_env_rejects_unparseable_vector_size() {
        temp_env::with_vars(
            [
                ("QDRANT_URL", Some("http://qdrant:6334")),
                ("QDRANT_API_KEY", Some("key")),
                ("QDRANT_VECTOR_SIZE", Some("large")),
            ],
            || {
                let err = QdrantConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("QDRANT_VECTOR_SIZE"));
            },
        );
    }
}
