use anyhow::Result;
use std::env;

/// Connection settings for the document store side of the demo.
#[derive(Clone, Debug)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

/// Connection settings for the task manager database.
#[derive(Clone, Debug)]
pub struct PostgresConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl PostgresConfig {
    /// Build a connection URL for sqlx. The password is percent-encoded
    /// so credentials with special characters survive URL parsing.
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            urlencoding::encode(&self.user),
            urlencoding::encode(&self.password),
            self.host,
            self.port,
            self.database,
        )
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo: MongoConfig,
    pub postgres: PostgresConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            mongo: MongoConfig {
                uri: env::var("MONGODB_URI")
                    .unwrap_or_else(|_| "mongodb://localhost:27017/".to_string()),
                database: env::var("MONGODB_DATABASE")
                    .unwrap_or_else(|_| "cats_db".to_string()),
                collection: env::var("MONGODB_COLLECTION")
                    .unwrap_or_else(|_| "cats".to_string()),
            },
            postgres: PostgresConfig {
                host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
                port: env::var("DB_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5432),
                database: env::var("DB_NAME")
                    .unwrap_or_else(|_| "task_manager_db".to_string()),
                user: env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
                password: env::var("DB_PASSWORD").unwrap_or_default(),
            },
        })
    }
}
