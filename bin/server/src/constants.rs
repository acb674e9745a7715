/// Environment variable holding the public host name
pub const HOST_ENV: &str = "FILEDROP_HOST";

/// Environment variable holding the public port
pub const PORT_ENV: &str = "FILEDROP_PORT";

/// Environment variable holding the depot directory
pub const DEPOT_ENV: &str = "FILEDROP_DEPOT";

/// Environment variable toggling uploads
pub const ALLOW_UPLOAD_ENV: &str = "FILEDROP_ALLOW_UPLOAD";

/// Environment variable toggling downloads
pub const ALLOW_DOWNLOAD_ENV: &str = "FILEDROP_ALLOW_DOWNLOAD";

/// Environment variable holding the IP address to listen on
pub const BIND_ENV: &str = "FILEDROP_BIND";

/// Environment variable holding the port to listen on
pub const LISTEN_PORT_ENV: &str = "FILEDROP_LISTEN_PORT";

/// Environment variable holding the upload size limit in bytes
pub const SIZE_LIMIT_ENV: &str = "FILEDROP_SIZE_LIMIT";

/// Default public host name
pub const DEFAULT_HOST: &str = "localhost";

/// Default public port (also the default listen port)
pub const DEFAULT_PORT: u16 = 3000;

/// Default depot directory
pub const DEFAULT_DEPOT: &str = "depot";

/// Default listen address
pub const DEFAULT_BIND: &str = "127.0.0.1";

/// Default upload size limit (50 MiB)
pub const DEFAULT_SIZE_LIMIT: usize = 50 * 1024 * 1024;

/// Port that is left out of displayed URLs
pub const HTTP_DEFAULT_PORT: u16 = 80;

/// How many fresh tokens an upload tries before giving up on collisions
pub const MAX_TOKEN_ATTEMPTS: usize = 5;

/// Body of every download miss, whatever the cause
pub const NOT_FOUND_MESSAGE: &str = "File not found.\n";

/// Body returned when uploads are disabled
pub const UPLOAD_PROHIBITED_MESSAGE: &str = "New file uploads are prohibited.\n";

/// Body returned when an upload exceeds the size limit
pub const TOO_LARGE_MESSAGE: &str = "File exceeds the upload size limit.\n";

/// Body returned when an upload cannot be persisted
pub const STORE_FAILED_MESSAGE: &str = "Failed to store file.\n";
