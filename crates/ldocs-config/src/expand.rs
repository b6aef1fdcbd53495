//! `${VAR}` references in `ldocs.toml` string values.

use std::borrow::Cow;

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a config value.
///
/// Only braced references are expanded: each `${...}` span is handed to
/// `shellexpand` on its own, so a bare `$VAR` elsewhere in the value stays
/// literal. An unterminated `${` is kept as text. An unset variable without
/// a default is an error naming the config field.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut expanded = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let end = start + len + 1;
        expanded.push_str(&rest[..start]);
        expanded.push_str(&expand_reference(&rest[start..end], field)?);
        rest = &rest[end..];
    }
    expanded.push_str(rest);

    Ok(expanded)
}

/// Expand a single `${...}` span.
fn expand_reference(reference: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(reference, lookup)
        .map(Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.cause.0),
        })
}

fn lookup(var: &str) -> Result<Option<String>, UnsetVar> {
    std::env::var(var)
        .map(Some)
        .map_err(|_| UnsetVar(var.to_owned()))
}

/// Name of a variable that was referenced but not set.
struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("LDOCS_UNSET_WITH_DEFAULT");
        }
        let result = expand_env("${LDOCS_UNSET_WITH_DEFAULT:-vuejs/docs}", "sync.upstream_repo");
        assert_eq!(result.unwrap(), "vuejs/docs");
    }

    #[test]
    fn test_expand_set_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("LDOCS_TEST_REPO_OWNER", "vuejs-translations");
        }
        let result = expand_env("${LDOCS_TEST_REPO_OWNER}/docs-ja", "sync.translation_repo");
        assert_eq!(result.unwrap(), "vuejs-translations/docs-ja");
        unsafe {
            std::env::remove_var("LDOCS_TEST_REPO_OWNER");
        }
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("LDOCS_MISSING_VAR");
        }
        let err = expand_env("${LDOCS_MISSING_VAR}", "docs.source_dir").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("LDOCS_MISSING_VAR"));
        assert!(err.to_string().contains("docs.source_dir"));
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        assert_eq!(expand_env("$HOME/docs", "docs.source_dir").unwrap(), "$HOME/docs");
    }

    #[test]
    fn test_bare_dollar_kept_next_to_braced_reference() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("LDOCS_TEST_LOCALE_DIR", "zh-cn");
        }
        let result = expand_env("$HOME/${LDOCS_TEST_LOCALE_DIR}/$PWD", "docs.source_dir");
        assert_eq!(result.unwrap(), "$HOME/zh-cn/$PWD");
        unsafe {
            std::env::remove_var("LDOCS_TEST_LOCALE_DIR");
        }
    }

    #[test]
    fn test_unterminated_reference_is_literal() {
        assert_eq!(
            expand_env("docs/${UNCLOSED", "docs.source_dir").unwrap(),
            "docs/${UNCLOSED"
        );
    }
}
