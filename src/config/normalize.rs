/// Per-field normalization rules
///
/// Applied once after the raw sources are merged. Every function here is
/// total: malformed input falls back to a safe default (with a warning)
/// instead of failing resolution. Availability is preferred over strict
/// validation at this layer.

use crate::config::sources::RawValue;
use std::env;

/// Port used when no source supplies a usable value
pub const DEFAULT_PORT: u16 = 8000;

/// Hosting platforms inject the listen port under this variable
pub const PORT_OVERRIDE_VAR: &str = "PORT";

/// Prefix marking a value as an indirection through another variable
const INDIRECTION_MARKER: char = '$';

/// Resolve a port candidate of unknown shape into a concrete port
///
/// Accepts a native integer, a digit string, or an indirection like "$PORT"
/// naming another environment variable. Lookup order for indirections:
/// the named variable, then the reserved PORT override, then the default.
/// Never fails; anything unusable resolves to 8000.
pub fn resolve_port(raw: &RawValue) -> u16 {
    match raw {
        RawValue::Int(i) => u16::try_from(*i).unwrap_or_else(|_| {
            tracing::warn!("port {} out of range, falling back to {}", i, DEFAULT_PORT);
            DEFAULT_PORT
        }),
        RawValue::Text(s) => resolve_port_text(s.trim()),
        RawValue::List(_) => {
            tracing::warn!("port supplied as a list, falling back to {}", DEFAULT_PORT);
            DEFAULT_PORT
        }
    }
}

fn resolve_port_text(candidate: &str) -> u16 {
    if let Some(var_name) = candidate.strip_prefix(INDIRECTION_MARKER) {
        // Indirection: the candidate names another environment variable
        if let Ok(value) = env::var(var_name) {
            if let Ok(port) = value.trim().parse::<u16>() {
                return port;
            }
        }
        // Named variable absent or non-numeric: try the platform override
        if let Ok(value) = env::var(PORT_OVERRIDE_VAR) {
            if let Ok(port) = value.trim().parse::<u16>() {
                return port;
            }
        }
        tracing::warn!(
            "port indirection '{}' did not resolve, falling back to {}",
            candidate,
            DEFAULT_PORT
        );
        return DEFAULT_PORT;
    }

    candidate.parse::<u16>().unwrap_or_else(|_| {
        tracing::warn!("unparseable port '{}', falling back to {}", candidate, DEFAULT_PORT);
        DEFAULT_PORT
    })
}

/// Normalize a CORS origin candidate into a list of trimmed origins
///
/// A native list is used as-is. A comma-delimited string is split, trimmed
/// and stripped of empty pieces with order preserved; a plain string becomes
/// a single-element list. Emptiness collapses to the wildcard so the output
/// is never empty.
pub fn normalize_origins(raw: &RawValue) -> Vec<String> {
    match raw {
        RawValue::List(items) => items.clone(),
        RawValue::Int(i) => vec![i.to_string()],
        RawValue::Text(s) => {
            let pieces = split_list(s);
            if pieces.is_empty() {
                vec!["*".to_string()]
            } else {
                pieces
            }
        }
    }
}

/// Normalize an allowed-hosts candidate with the same splitting rule
///
/// An empty result falls back to the supplied default list instead of the
/// wildcard: an empty host allow-list is never what an operator meant.
pub fn normalize_hosts(raw: &RawValue, default: &[&str]) -> Vec<String> {
    let fallback = || default.iter().map(|h| h.to_string()).collect();
    match raw {
        RawValue::List(items) if !items.is_empty() => items.clone(),
        RawValue::Text(s) => {
            let pieces = split_list(s);
            if pieces.is_empty() {
                fallback()
            } else {
                pieces
            }
        }
        _ => fallback(),
    }
}

/// Split a delimited string into trimmed, non-empty pieces
fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lenient boolean coercion
///
/// Accepts 1/true/yes/on and 0/false/no/off in any case; anything else keeps
/// the default.
pub fn normalize_bool(raw: &RawValue, default: bool) -> bool {
    match raw {
        RawValue::Int(i) => *i != 0,
        RawValue::Text(s) => match s.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            other => {
                tracing::warn!("unparseable boolean '{}', keeping {}", other, default);
                default
            }
        },
        RawValue::List(_) => default,
    }
}

/// Lenient integer coercion
pub fn normalize_int(raw: &RawValue, default: i64) -> i64 {
    match raw {
        RawValue::Int(i) => *i,
        RawValue::Text(s) => s.trim().parse::<i64>().unwrap_or_else(|_| {
            tracing::warn!("unparseable integer '{}', keeping {}", s, default);
            default
        }),
        RawValue::List(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env_test_lock;

    #[test]
    fn port_integer_passes_through() {
        assert_eq!(resolve_port(&RawValue::Int(3004)), 3004);
        assert_eq!(resolve_port(&RawValue::Int(1)), 1);
        assert_eq!(resolve_port(&RawValue::Int(65535)), 65535);
    }

    #[test]
    fn port_out_of_range_integer_falls_back() {
        assert_eq!(resolve_port(&RawValue::Int(70000)), DEFAULT_PORT);
        assert_eq!(resolve_port(&RawValue::Int(-1)), DEFAULT_PORT);
    }

    #[test]
    fn port_numeric_string_parses() {
        assert_eq!(resolve_port(&RawValue::Text("9090".into())), 9090);
        assert_eq!(resolve_port(&RawValue::Text(" 9090 ".into())), 9090);
    }

    #[test]
    fn port_garbage_string_falls_back() {
        assert_eq!(resolve_port(&RawValue::Text("abc".into())), DEFAULT_PORT);
        assert_eq!(resolve_port(&RawValue::Text("".into())), DEFAULT_PORT);
        assert_eq!(resolve_port(&RawValue::Text("80.5".into())), DEFAULT_PORT);
    }

    #[test]
    fn port_indirection_resolves_named_variable() {
        let _guard = env_test_lock();
        std::env::set_var("RTGS_TEST_PORT_A", "7777");
        std::env::remove_var(PORT_OVERRIDE_VAR);

        assert_eq!(resolve_port(&RawValue::Text("$RTGS_TEST_PORT_A".into())), 7777);

        std::env::remove_var("RTGS_TEST_PORT_A");
    }

    #[test]
    fn port_indirection_falls_back_to_reserved_override() {
        let _guard = env_test_lock();
        std::env::remove_var("RTGS_TEST_PORT_B");
        std::env::set_var(PORT_OVERRIDE_VAR, "6000");

        assert_eq!(resolve_port(&RawValue::Text("$RTGS_TEST_PORT_B".into())), 6000);

        std::env::remove_var(PORT_OVERRIDE_VAR);
    }

    #[test]
    fn port_indirection_with_non_numeric_target_uses_override() {
        let _guard = env_test_lock();
        std::env::set_var("RTGS_TEST_PORT_C", "not-a-port");
        std::env::set_var(PORT_OVERRIDE_VAR, "6001");

        assert_eq!(resolve_port(&RawValue::Text("$RTGS_TEST_PORT_C".into())), 6001);

        std::env::remove_var("RTGS_TEST_PORT_C");
        std::env::remove_var(PORT_OVERRIDE_VAR);
    }

    #[test]
    fn port_indirection_with_nothing_set_defaults() {
        let _guard = env_test_lock();
        std::env::remove_var("RTGS_TEST_PORT_D");
        std::env::remove_var(PORT_OVERRIDE_VAR);

        assert_eq!(
            resolve_port(&RawValue::Text("$RTGS_TEST_PORT_D".into())),
            DEFAULT_PORT
        );
    }

    #[test]
    fn origins_delimited_string_splits_and_trims() {
        let raw = RawValue::Text("http://a.com, http://b.com,,".into());
        assert_eq!(
            normalize_origins(&raw),
            vec!["http://a.com".to_string(), "http://b.com".to_string()]
        );
    }

    #[test]
    fn origins_single_value_and_wildcard() {
        assert_eq!(normalize_origins(&RawValue::Text("*".into())), vec!["*"]);
        assert_eq!(
            normalize_origins(&RawValue::Text("http://a.com".into())),
            vec!["http://a.com"]
        );
        assert_eq!(normalize_origins(&RawValue::Text("   ".into())), vec!["*"]);
        assert_eq!(normalize_origins(&RawValue::Text(",,".into())), vec!["*"]);
    }

    #[test]
    fn origins_list_passes_through_unchanged() {
        let raw = RawValue::List(vec!["http://a.com".into(), "http://a.com".into()]);
        assert_eq!(
            normalize_origins(&raw),
            vec!["http://a.com".to_string(), "http://a.com".to_string()]
        );
    }

    #[test]
    fn hosts_split_with_default_fallback() {
        let default = ["localhost", "127.0.0.1"];
        assert_eq!(
            normalize_hosts(&RawValue::Text("a.example, b.example".into()), &default),
            vec!["a.example".to_string(), "b.example".to_string()]
        );
        assert_eq!(
            normalize_hosts(&RawValue::Text("  ".into()), &default),
            vec!["localhost".to_string(), "127.0.0.1".to_string()]
        );
    }

    #[test]
    fn bool_coercion_is_lenient() {
        assert!(normalize_bool(&RawValue::Text("yes".into()), false));
        assert!(normalize_bool(&RawValue::Text("TRUE".into()), false));
        assert!(!normalize_bool(&RawValue::Text("off".into()), true));
        assert!(normalize_bool(&RawValue::Text("maybe".into()), true));
        assert!(!normalize_bool(&RawValue::Int(0), true));
    }

    #[test]
    fn int_coercion_is_lenient() {
        assert_eq!(normalize_int(&RawValue::Text("45".into()), 30), 45);
        assert_eq!(normalize_int(&RawValue::Text("soon".into()), 30), 30);
        assert_eq!(normalize_int(&RawValue::Int(15), 30), 15);
    }
}
