use std::net::SocketAddr;

use once_cell::sync::Lazy;

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

pub struct Config {
    pub bind_addr: SocketAddr,
}

impl Config {
    fn from_env() -> Self {
        let bind_addr = std::env::var("BIND_ADDR")
            .ok()
            .and_then(|addr| addr.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 5000)));
        Self { bind_addr }
    }
}
