//! The decision scenario the learner analyzes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::ValidationError;

/// Fewest characters of source material accepted for scenario parsing.
pub const MIN_SCENARIO_INPUT_CHARS: usize = 100;

/// Where the scenario text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Text,
    Pdf,
    Url,
    Example,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Text => "text",
            SourceType::Pdf => "pdf",
            SourceType::Url => "url",
            SourceType::Example => "example",
        }
    }
}

/// A make/buy/partner case framed as a strategic question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub context: String,
    #[serde(default)]
    pub key_factors: Vec<String>,
    #[serde(default)]
    pub stakeholders: Vec<String>,
    #[serde(default)]
    pub constraints: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_input: Option<String>,
    #[serde(default)]
    pub source_type: SourceType,
}

impl Scenario {
    /// Fresh scenario identifier.
    pub fn new_id() -> String {
        format!("scenario-{}", Uuid::new_v4())
    }

    /// The built-in case: an EV startup deciding how to source batteries.
    pub fn example() -> Self {
        Self {
            id: "rivian-batteries".to_string(),
            title: "Rivian Battery Strategy".to_string(),
            summary: "Rivian, a well-funded EV startup, faces a pivotal decision on its battery \
                      strategy. Should they invest heavily to develop battery manufacturing \
                      in-house (like Tesla), continue purchasing cells from established \
                      suppliers like Samsung SDI and LG Chem, or form a strategic joint venture \
                      to share costs and expertise? With batteries representing 30-40% of \
                      vehicle cost and defining competitive differentiation, what approach \
                      should Rivian take?"
                .to_string(),
            context: "Rivian is a well-funded EV startup competing against Tesla and legacy \
                      automakers entering the electric vehicle market. Batteries represent \
                      30-40% of vehicle cost and are critical for performance differentiation. \
                      The company has limited manufacturing experience but strong engineering \
                      talent and significant capital from Amazon and Ford investments."
                .to_string(),
            key_factors: strings(&[
                "Batteries are the most expensive and strategically important EV component",
                "Battery technology is rapidly evolving (lithium-ion approaching limits, solid-state emerging)",
                "Limited supplier options with long lead times and capacity constraints",
                "Tesla has demonstrated advantages from vertical integration",
                "Rivian needs to scale production quickly to meet demand",
                "Capital constraints despite significant funding",
            ]),
            stakeholders: strings(&[
                "Rivian engineering and manufacturing teams",
                "Investors (Amazon, Ford)",
                "Potential battery suppliers (Samsung SDI, LG Chem, Panasonic)",
                "Customers expecting competitive range and performance",
            ]),
            constraints: strings(&[
                "Time pressure to scale production",
                "Capital allocation decisions",
                "Limited in-house battery manufacturing expertise",
                "Need for customized battery specs for adventure vehicles",
            ]),
            raw_input: Some("Rivian case study - battery strategy decision".to_string()),
            source_type: SourceType::Example,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Checks that raw source material is long enough to frame a case from.
pub fn validate_scenario_input(field: &str, input: &str) -> Result<(), ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    let chars = trimmed.chars().count();
    if chars < MIN_SCENARIO_INPUT_CHARS {
        return Err(ValidationError::too_short(
            field,
            MIN_SCENARIO_INPUT_CHARS,
            chars,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_scenario_is_complete() {
        let scenario = Scenario::example();

        assert_eq!(scenario.id, "rivian-batteries");
        assert_eq!(scenario.source_type, SourceType::Example);
        assert_eq!(scenario.key_factors.len(), 6);
        assert_eq!(scenario.stakeholders.len(), 4);
        assert_eq!(scenario.constraints.len(), 4);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(Scenario::example()).unwrap();

        assert_eq!(json["sourceType"], "example");
        assert!(json["keyFactors"].is_array());
        assert!(json["rawInput"].is_string());
    }

    #[test]
    fn lists_default_when_missing() {
        let scenario: Scenario = serde_json::from_value(serde_json::json!({
            "id": "s-1",
            "title": "t",
            "summary": "s",
            "context": "c"
        }))
        .unwrap();

        assert!(scenario.key_factors.is_empty());
        assert_eq!(scenario.source_type, SourceType::Text);
        assert_eq!(scenario.raw_input, None);
    }

    #[test]
    fn new_ids_are_unique() {
        let a = Scenario::new_id();
        assert!(a.starts_with("scenario-"));
        assert_ne!(a, Scenario::new_id());
    }

    #[test]
    fn input_must_reach_minimum_length() {
        assert_eq!(
            validate_scenario_input("input", "   ").unwrap_err(),
            ValidationError::empty_field("input")
        );
        assert_eq!(
            validate_scenario_input("input", &"a".repeat(99)).unwrap_err(),
            ValidationError::too_short("input", 100, 99)
        );
        assert!(validate_scenario_input("input", &"a".repeat(100)).is_ok());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(validate_scenario_input("input", &"é".repeat(60)).is_err());
    }
}
