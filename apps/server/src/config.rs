//! Environment-based server configuration.

/// Server configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        let listen_addr =
            std::env::var("IF_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8480".to_string());
        let db_path =
            std::env::var("IF_DB_PATH").unwrap_or_else(|_| "data/inmoflow.db".to_string());
        Self {
            listen_addr,
            db_path,
        }
    }
}
