//! Insight ID generation.
//!
//! IDs are derived, not random: `{prefix}-{tag-slug}-{sequence}` where the tag
//! slug joins tags with `_`, collapses whitespace runs to `-` and lowercases.
//! The sequence is a positional index for API-sourced insights and a
//! millisecond timestamp for user-generated ones.

/// Prefix for insights ingested from a source that does not split top/detailed.
pub const PREFIX_API: &str = "api";

/// Prefix for insights ingested from the "top" section of a retrospective.
pub const PREFIX_API_TOP: &str = "api-top";

/// Prefix for insights ingested from the "detailed" section of a retrospective.
pub const PREFIX_API_DETAILED: &str = "api-detailed";

/// Prefix for user-generated custom insights.
pub const PREFIX_CUSTOM: &str = "custom";

/// Build the slug portion of an insight ID from its tags.
#[must_use]
pub fn tag_slug(tags: &[String]) -> String {
    let joined = tags.join("_");
    let mut slug = String::with_capacity(joined.len());
    let mut in_whitespace = false;
    for ch in joined.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }
    slug
}

/// Derive an insight ID from its tags, a scope prefix, and a sequence number.
///
/// Identical inputs always yield identical IDs.
#[must_use]
pub fn insight_id(tags: &[String], prefix: &str, sequence: u64) -> String {
    format!("{prefix}-{}-{sequence}", tag_slug(tags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn slug_collapses_whitespace_and_lowercases() {
        assert_eq!(
            tag_slug(&tags(&["No Automation", "Payment  Service"])),
            "no-automation_payment-service"
        );
    }

    #[test]
    fn id_has_prefix_slug_and_sequence() {
        let id = insight_id(&tags(&["Noisy", "CPU High"]), PREFIX_API_TOP, 0);
        assert_eq!(id, "api-top-noisy_cpu-high-0");
    }

    #[test]
    fn same_inputs_same_id() {
        let t = tags(&["Flapping"]);
        assert_eq!(
            insight_id(&t, PREFIX_API_DETAILED, 3),
            insight_id(&t, PREFIX_API_DETAILED, 3)
        );
    }

    #[test]
    fn different_sequence_different_id() {
        let t = tags(&["Flapping"]);
        assert_ne!(insight_id(&t, PREFIX_API, 1), insight_id(&t, PREFIX_API, 2));
    }

    #[test]
    fn different_prefix_different_id() {
        let t = tags(&["Flapping"]);
        assert_ne!(
            insight_id(&t, PREFIX_API_TOP, 0),
            insight_id(&t, PREFIX_API_DETAILED, 0)
        );
    }

    #[test]
    fn empty_tags_still_produce_an_id() {
        assert_eq!(insight_id(&[], PREFIX_CUSTOM, 17), "custom--17");
    }
}
