//! Environment variable handling
//!
//! Type-safe access to the few environment variables the tool reads.

use std::env;
use std::fmt;

/// Environment variable parsing error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variable '{}': {}", self.variable, self.message)
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// Accessor for a single environment variable
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => {
                if let Some(default) = Self::DEFAULT {
                    Ok(default)
                } else {
                    Err(EnvError {
                        variable: Self::NAME.to_string(),
                        message: "Required environment variable not set".to_string(),
                    })
                }
            }
        }
    }

    fn get_or_default(default: T) -> T {
        Self::get().unwrap_or(default)
    }
}

/// Log level
pub struct LogLevel;
impl EnvVar<&'static str> for LogLevel {
    const NAME: &'static str = "DOMAIN_ANNOTATIONS_LOG_LEVEL";
    const DEFAULT: Option<&'static str> = Some("info");
    const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

    fn parse(value: &str) -> EnvResult<&'static str> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

        LEVELS
            .into_iter()
            .find(|level| level.eq_ignore_ascii_case(value))
            .ok_or_else(|| EnvError {
                variable: Self::NAME.to_string(),
                message: format!("Invalid log level '{}'. Use: {}", value, LEVELS.join(", ")),
            })
    }
}

/// Disable colored output
pub struct NoColor;
impl EnvVar<bool> for NoColor {
    const NAME: &'static str = "NO_COLOR";
    const DEFAULT: Option<bool> = Some(false);
    const DESCRIPTION: &'static str = "Disable colored output when set to any value";

    fn parse(value: &str) -> EnvResult<bool> {
        // Any non-empty value disables color (https://no-color.org)
        Ok(!value.is_empty())
    }
}

/// Configuration collected from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub log_level: &'static str,
    pub no_color: bool,
}

impl EnvConfig {
    pub fn from_env() -> EnvResult<Self> {
        Ok(Self {
            log_level: LogLevel::get()?,
            no_color: NoColor::get()?,
        })
    }
}

/// Renders a Markdown list of the supported environment variables
pub fn generate_env_docs() -> String {
    let mut docs = String::new();
    docs.push_str("# Environment Variables\n\n");
    docs.push_str(&format!(
        "- `{}`: {} (default: {:?})\n",
        LogLevel::NAME,
        LogLevel::DESCRIPTION,
        LogLevel::DEFAULT
    ));
    docs.push_str(&format!(
        "- `{}`: {} (default: {:?})\n",
        NoColor::NAME,
        NoColor::DESCRIPTION,
        NoColor::DEFAULT
    ));
    docs
}
