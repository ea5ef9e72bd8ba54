pub const BORED_SERVER_URL: &'static str = "http://api2.transloadit.com/instances/bored";

pub const DEFAULT_EXPIRATION_MINUTES: i64 = 120;
pub const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 300;

pub const BLOCKING_MODE: &'static str = "true";

pub const EXPIRES_FORMAT: &'static str = "%Y/%m/%d %H:%M:%S+00:00";
