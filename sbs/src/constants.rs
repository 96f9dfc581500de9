//! Constants used internally across the SDK.

// Env values used by the SDK.
pub const ENV_ACCESS_KEY: &str = "ACCESS_KEY";
pub const ENV_SECRET_KEY: &str = "SECRET_KEY";
pub const ENV_BASE_URL: &str = "BASE_URL";
pub const ENV_CONFIG_FILE: &str = "JCS_CONFIG_FILE";

// Properties-file layout: a `[branch]` section whose `env` key names the
// section that carries the actual values.
pub const DEFAULT_CONFIG_FILE: &str = "fixtures/config.properties";
pub const CONFIG_BRANCH_SECTION: &str = "branch";
pub const CONFIG_BRANCH_KEY: &str = "env";

// Signing protocol constants sent with every request.
pub const SIGNATURE_VERSION: &str = "2";
pub const SIGNATURE_METHOD: &str = "HmacSHA256";
pub const API_VERSION: &str = "2016-03-01";

// Header values injected on every request.
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const ACCEPT_ENCODING_IDENTITY: &str = "identity";
