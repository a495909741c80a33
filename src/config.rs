use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Application-level constants
pub const APP_NAME: &str = "PCOS Health Tracker";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default listen port when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

/// Default tracing filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_CRATE_NAME"))
}

/// Resolve the socket address to bind, honoring the `PORT` env var.
/// Invalid values fall back to the default port.
pub fn bind_addr() -> SocketAddr {
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);

    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port)
}
