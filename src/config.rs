use crate::error::{AppError, Result};
use std::env;

/// Background color served when `BG_COLOR` is unset or empty
const DEFAULT_BG_COLOR: &str = "white";

/// Port the server binds when `PORT` is unset
const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug)]
pub struct Config {
    pub bg_color: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // An empty BG_COLOR is treated the same as an unset one
        let bg_color = env::var("BG_COLOR")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BG_COLOR.to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| AppError::Config("PORT must be a valid port number".to_string()))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { bg_color, port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // All env mutation lives in one test so parallel tests never race on
    // the process environment.
    #[test]
    fn test_from_env_bg_color_and_port() {
        env::remove_var("BG_COLOR");
        env::remove_var("PORT");
        let config = Config::from_env().unwrap();
        assert_eq!(config.bg_color, "white");
        assert_eq!(config.port, 3000);

        env::set_var("BG_COLOR", "red");
        let config = Config::from_env().unwrap();
        assert_eq!(config.bg_color, "red");

        // Empty value falls back to the default
        env::set_var("BG_COLOR", "");
        let config = Config::from_env().unwrap();
        assert_eq!(config.bg_color, "white");

        env::set_var("BG_COLOR", "#ff8800");
        env::set_var("PORT", "8080");
        let config = Config::from_env().unwrap();
        assert_eq!(config.bg_color, "#ff8800");
        assert_eq!(config.port, 8080);

        env::set_var("PORT", "not-a-port");
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("PORT"));

        env::remove_var("BG_COLOR");
        env::remove_var("PORT");
    }
}
