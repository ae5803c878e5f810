//! Environment variable expansion for config values.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a config value.
///
/// `${VAR}` requires the variable to be set; `${VAR:-default}` falls back
/// to the literal default when it is not. Text outside references passes
/// through unchanged.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut result = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            return Err(ConfigError::EnvVar {
                field: field.to_owned(),
                message: format!("unterminated '${{' in '{value}'"),
            });
        };

        let expr = &after[..end];
        let (name, default) = match expr.split_once(":-") {
            Some((name, default)) => (name, Some(default)),
            None => (expr, None),
        };

        match std::env::var(name) {
            Ok(var_value) => result.push_str(&var_value),
            Err(_) => match default {
                Some(default) => result.push_str(default),
                None => {
                    return Err(ConfigError::EnvVar {
                        field: field.to_owned(),
                        message: format!("${{{name}}} not set"),
                    });
                }
            },
        }

        rest = &after[end + 1..];
    }

    result.push_str(rest);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value_passes_through() {
        assert_eq!(expand_env("/docs", "site.base_path").unwrap(), "/docs");
    }

    #[test]
    fn test_set_variable_expands() {
        // Unique variable name; tests share the process environment.
        unsafe { std::env::set_var("SITENAV_EXPAND_SET", "base") };

        let expanded = expand_env("/${SITENAV_EXPAND_SET}/v1", "site.base_path").unwrap();

        assert_eq!(expanded, "/base/v1");
    }

    #[test]
    fn test_unset_variable_without_default_errors() {
        let err = expand_env("${SITENAV_EXPAND_UNSET}", "site.base_path").unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { message, .. }
            if message.contains("SITENAV_EXPAND_UNSET")));
    }

    #[test]
    fn test_unset_variable_with_default_falls_back() {
        let expanded =
            expand_env("${SITENAV_EXPAND_UNSET2:-/fallback}", "site.base_path").unwrap();

        assert_eq!(expanded, "/fallback");
    }

    #[test]
    fn test_unterminated_reference_errors() {
        let err = expand_env("/${OOPS", "site.base_path").unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { message, .. }
            if message.contains("unterminated")));
    }
}
