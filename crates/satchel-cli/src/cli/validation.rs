/// Parse a `KEY=VALUE` environment override.
///
/// The key must be a valid environment variable name: ASCII letters, digits
/// and underscores, not starting with a digit. The value may be empty, which
/// the resolver treats like an unset variable.
///
/// # Errors
///
/// Returns an error message if the pair is malformed.
pub fn parse_env_pair(s: &str) -> Result<(String, String), String> {
    let Some((key, value)) = s.split_once('=') else {
        return Err(format!("Expected KEY=VALUE, got '{}'", s));
    };

    if key.is_empty() {
        return Err("Environment variable name cannot be empty".to_string());
    }

    if key.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(format!(
            "Environment variable name cannot start with a digit: '{}'",
            key
        ));
    }

    if !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(format!(
            "Environment variable name can only contain letters, digits, or underscores: '{}'",
            key
        ));
    }

    Ok((key.to_string(), value.to_string()))
}
