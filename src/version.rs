// Compile-time constants from Cargo.toml and build.rs
pub const VERSION: &str = env!("GICM_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
