const HOST: &str = "127.0.0.1";
const PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
        }
    }
}

impl AppConfig {
    /// Reads `HOST` and `PORT`, falling back to the defaults when unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::var("HOST").ok(), std::env::var("PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            host: host
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port: port
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
        }
    }
}
