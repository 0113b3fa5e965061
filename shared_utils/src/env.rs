use thiserror::Error;

/// An environment variable required by the application is not set.
#[derive(Debug, Error)]
#[error("Missing environment variable: {0}")]
pub struct MissingEnvVarError(pub String);

/// Reads an environment variable, returning a structured error if it's missing.
///
/// This is a thin wrapper around `std::env::var` that provides a more
/// ergonomic and specific error type for missing variables.
///
/// # Arguments
/// * `name` - The name of the environment variable to read.
pub fn get_env_var(name: &str) -> Result<String, MissingEnvVarError> {
    std::env::var(name).map_err(|_| MissingEnvVarError(name.to_string()))
}

/// Like [`get_env_var`], but a variable that is set to an empty or
/// whitespace-only value counts as missing. The returned value is trimmed.
///
/// Used for optional overrides, where `FOO=` in a `.env` file should leave
/// the configured default untouched.
pub fn get_non_empty_env_var(name: &str) -> Result<String, MissingEnvVarError> {
    let value = get_env_var(name)?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MissingEnvVarError(name.to_string()));
    }
    Ok(trimmed.to_string())
}
