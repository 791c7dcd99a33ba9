use serde::Deserialize;
use crate::config::env::{self, EnvKey};

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    /// Without a database URL the API runs on the in-memory store.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            database_url: env::get_optional(EnvKey::DatabaseUrl),
            database_max_connections: env::get_parsed(EnvKey::DatabaseMaxConnections, 20),
            run_migrations: env::get_parsed(EnvKey::RunMigrations, true),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 3000,
            database_url: None,
            database_max_connections: 20,
            run_migrations: true,
        }
    }
}
