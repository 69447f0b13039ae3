pub const DEFAULT_URL: &str = "http://localhost:8181";
pub const DEFAULT_PACKAGE: &str = "example";
pub const DEFAULT_RULE: &str = "allow";

pub(crate) const DEFAULT_WORKERS: &str = "10";
pub(crate) const DEFAULT_INTERVAL: &str = "10s";
pub(crate) const DEFAULT_INPUTS: &str = "10000";
pub(crate) const DEFAULT_PATHS: &str = "10000";
pub(crate) const DEFAULT_USERS: &str = "1000";
