pub struct ServerConfig;

impl ServerConfig {
    pub const DEFAULT_PORT: u16 = 8765;
    pub const LISTEN_HOST: &'static str = "0.0.0.0";
    pub const PORT_ENV: &'static str = "PORT";
    pub const MAC_MODE_ENV: &'static str = "CALLHOME_MAC_MODE";
    pub const RELEASE_URL_ENV: &'static str = "CALLHOME_RELEASE_URL";

    // Release check
    pub const RELEASE_URL: &'static str =
        "http://api.github.com/repos/josegonzalez/dc2/releases/latest";
    pub const RELEASE_TIMEOUT_SECS: u64 = 10;
    pub const RELEASE_USER_AGENT: &'static str = concat!("callhome/", env!("CARGO_PKG_VERSION"));
    pub const UNKNOWN_VERSION: &'static str = "unknown";
    pub const CALL_HOME_OK: u16 = 200;
    pub const CALL_HOME_NOT_FOUND: u16 = 404;

    /// Name prefixes treated as the primary Ethernet-like adapter.
    pub const PRIMARY_IFACE_PREFIXES: &'static [&'static str] = &["en", "eth"];

    pub const JSON_INDENT: &'static [u8] = b"    ";
}
