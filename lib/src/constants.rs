//! Configuration constants for the entregas backend

/// Default server configuration
pub mod server {
    /// Default HTTP listening host
    pub const DEFAULT_HOST: &str = "127.0.0.1";

    /// Default HTTP server port
    pub const DEFAULT_PORT: u16 = 3000;
}

/// Database configuration
pub mod database {
    /// Default PostgreSQL host
    pub const DEFAULT_HOST: &str = "localhost";

    /// Default PostgreSQL port
    pub const DEFAULT_PORT: u16 = 5432;

    /// Default PostgreSQL user
    pub const DEFAULT_USER: &str = "postgres";

    /// Default PostgreSQL password
    pub const DEFAULT_PASSWORD: &str = "postgres";

    /// Default database name
    pub const DEFAULT_DBNAME: &str = "entregas";

    /// Default maximum database connections
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 32;

    /// Default connection acquisition timeout in seconds
    pub const DEFAULT_CONNECTION_TIMEOUT_SECS: u64 = 15;
}
