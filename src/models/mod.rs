pub mod config;

pub use self::config::ServerConfig;
