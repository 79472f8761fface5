use std::env;

/// Extension url the future appointment count is stored under.
pub const FUTURE_APPOINTMENT_COUNT_URL: &str = "http://integer";

/// Extension url the eye colour code is stored under.
pub const EYE_COLOUR_URL: &str = "http://token";

const DEFAULT_EXCLUDED_OPERATIONS: &str = "metadata";

#[derive(Debug, Clone)]
pub struct Config {
    pub count_extension_url: String,
    pub eye_colour_extension_url: String,
    /// Operation names whose responses never trigger a recount.
    pub excluded_operations: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let count_extension_url = env::var("COUNT_EXTENSION_URL")
            .unwrap_or_else(|_| FUTURE_APPOINTMENT_COUNT_URL.to_string());

        let eye_colour_extension_url =
            env::var("EYE_COLOUR_EXTENSION_URL").unwrap_or_else(|_| EYE_COLOUR_URL.to_string());

        let excluded_operations = parse_operation_list(
            &env::var("EXCLUDED_OPERATIONS")
                .unwrap_or_else(|_| DEFAULT_EXCLUDED_OPERATIONS.to_string()),
        );

        Config {
            count_extension_url,
            eye_colour_extension_url,
            excluded_operations,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            count_extension_url: FUTURE_APPOINTMENT_COUNT_URL.to_string(),
            eye_colour_extension_url: EYE_COLOUR_URL.to_string(),
            excluded_operations: parse_operation_list(DEFAULT_EXCLUDED_OPERATIONS),
        }
    }
}

/// Parse a comma separated list of operation names.
fn parse_operation_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|op| op.trim().to_string())
        .filter(|op| !op.is_empty())
        .collect()
}
