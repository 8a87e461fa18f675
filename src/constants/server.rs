/// Default bind address for the HTTP service.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default graceful shutdown timeout in seconds.
/// Workers get this long to finish in-flight calls before being dropped.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECONDS: u64 = 5;
