/// Env var that selects the maximum level of the expansion log
pub(crate) const LOG_ENV_VAR: &str = "CLOAKED_LOG";

/// Panic message of the generated code if the bytes fail to decode at runtime
pub(crate) const INVALID_UTF8_MESSAGE: &str = "cloaked string is not valid UTF-8";
