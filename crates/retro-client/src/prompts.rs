//! Prompt text for the LLM generation contract.
//!
//! Both prompts describe the expected JSON shape inline and ask for JSON
//! only; the request also sets `responseMimeType: application/json`.

const INSIGHT_SHAPE: &str = r#"interface Insight {
  tags: string[];            // the tag combination, e.g. ["Suppressed", "Hadoop"]
  count: number;             // number of alerts matching the combination
  summary: string;           // two or three sentences on what happened
  recommendation?: string;   // one concrete follow-up
  exampleAlertTitles?: string[];
  trendData?: { date: string; count: number }[]; // Mon..Sun or "Day 1".."Day 7"
  alertNotesSummary?: string;
  detailedAlerts?: {
    id: string;
    title: string;
    timestamp: string;       // "YYYY-MM-DD HH:MM:SS"
    severity?: "Critical" | "Warning" | "Info";
    description?: string;
    tags?: string[];
    notes?: string;
  }[];
  suggestedAction?: { displayText: string; actionUrl?: string };
}"#;

/// Prompt for a full week's retrospective.
#[must_use]
pub fn retrospective_prompt() -> String {
    format!(
        "You are an SRE assistant writing the weekly oncall retrospective for a \
platform team. Invent a plausible week of alerts for a data platform \
(Hadoop, JVM services, network, storage) and summarize it.\n\n\
Return a single JSON object matching this TypeScript definition:\n\n\
{INSIGHT_SHAPE}\n\n\
interface RetrospectiveSummary {{\n  overallSummaryText: string;\n  \
topInsights: Insight[];      // the 2 or 3 most important tag combinations\n  \
detailedInsights: Insight[]; // 4 to 6 further combinations\n}}\n\n\
Include trendData for every insight and detailedAlerts for the top insights. \
Respond with JSON only, without Markdown fences or commentary."
    )
}

/// Prompt for one insight about a user-chosen tag combination.
#[must_use]
pub fn custom_insight_prompt(tags: &[String]) -> String {
    let quoted = tags
        .iter()
        .map(|tag| format!("\"{tag}\""))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "You are an SRE assistant. Over the past week, consider oncall alerts \
that carry ALL of these tags: [{quoted}].\n\n\
Return a single JSON object matching this TypeScript definition:\n\n\
{INSIGHT_SHAPE}\n\n\
The `tags` field must echo exactly [{quoted}]. Include trendData and \
exampleAlertTitles. Respond with JSON only, without Markdown fences or commentary."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_prompt_quotes_every_tag() {
        let prompt = custom_insight_prompt(&["Hadoop".into(), "JVM".into()]);
        assert!(prompt.contains(r#"["Hadoop", "JVM"]"#));
        assert!(prompt.contains("JSON only"));
    }

    #[test]
    fn retrospective_prompt_names_all_fields() {
        let prompt = retrospective_prompt();
        for field in ["overallSummaryText", "topInsights", "detailedInsights"] {
            assert!(prompt.contains(field), "missing {field}");
        }
    }
}
