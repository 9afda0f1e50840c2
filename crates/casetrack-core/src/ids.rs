//! ID prefix constants.
//!
//! IDs are generated by the store as `{prefix}-{16 hex chars}`,
//! e.g. `itg-3f9a0c4b7d21e588`.

pub const PREFIX_SATKER: &str = "stk";
pub const PREFIX_CASE: &str = "cas";
pub const PREFIX_WARRANT: &str = "wrt";
pub const PREFIX_RESEARCH: &str = "rsc";
pub const PREFIX_INTERROGATION: &str = "itg";
pub const PREFIX_INTERVIEW: &str = "itv";

pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_SATKER,
    PREFIX_CASE,
    PREFIX_WARRANT,
    PREFIX_RESEARCH,
    PREFIX_INTERROGATION,
    PREFIX_INTERVIEW,
];

/// Check whether `id` carries the given prefix followed by a dash.
#[must_use]
pub fn has_prefix(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with('-') && rest.len() > 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_prefix_requires_dash_and_body() {
        assert!(has_prefix("itg-00ff", PREFIX_INTERROGATION));
        assert!(!has_prefix("itg00ff", PREFIX_INTERROGATION));
        assert!(!has_prefix("itg-", PREFIX_INTERROGATION));
        assert!(!has_prefix("itv-00ff", PREFIX_INTERROGATION));
    }
}
