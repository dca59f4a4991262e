// src/types.rs

use std::str::FromStr;

use serde::Deserialize;

/// What to do with nodes that are referenced in an `after` list but never
/// declared with their own `[node.<name>]` section.
///
/// - `Include`: treat them as nodes without dependencies and order them like
///   any other node (default behaviour).
/// - `Reject`: refuse to load the graph file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndeclaredPolicy {
    #[default]
    Include,
    Reject,
}

impl FromStr for UndeclaredPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "include" => Ok(UndeclaredPolicy::Include),
            "reject" => Ok(UndeclaredPolicy::Reject),
            other => Err(format!(
                "invalid undeclared policy: {other} (expected \"include\" or \"reject\")"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_policy_case_insensitively() {
        assert_eq!(" Reject ".parse::<UndeclaredPolicy>(), Ok(UndeclaredPolicy::Reject));
        assert_eq!("include".parse::<UndeclaredPolicy>(), Ok(UndeclaredPolicy::Include));
        assert!("drop".parse::<UndeclaredPolicy>().is_err());
    }
}
