use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn contact_address() -> &'static str {
    "dev@litenode.net"  // Keeps test submissions out of the support inbox
}

#[cfg(not(debug_assertions))]
pub fn contact_address() -> &'static str {
    "support@litenode.net"
}
