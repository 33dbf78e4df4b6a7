use crate::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,
    pub database_name: String,

    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string()))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: std::env::var("MONGODB_URI")
                .map_err(|_| ConfigError::MissingEnvVar("MONGODB_URI".to_string()))?,
            database_name: std::env::var("DATABASE_NAME")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_NAME".to_string()))?,
            port,
        })
    }
}
