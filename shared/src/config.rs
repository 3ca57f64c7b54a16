use anyhow::Result;
use std::env;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub http: HttpConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env_or("DATABASE_HOST", "localhost"),
            port: env_or("DATABASE_PORT", "5432").parse()?,
            username: env_or("DATABASE_USERNAME", "app"),
            password: env_or("DATABASE_PASSWORD", "passwd"),
            database: env_or("DATABASE_NAME", "app"),
        };
        let redis = RedisConfig {
            host: env_or("REDIS_HOST", "localhost"),
            port: env_or("REDIS_PORT", "6379").parse()?,
        };
        let http = HttpConfig {
            port: env_or("PORT", "8080").parse()?,
        };
        Ok(Self {
            database,
            redis,
            http,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct RedisConfig {
    pub host: String,
    pub port: u16,
}

pub struct HttpConfig {
    pub port: u16,
}
