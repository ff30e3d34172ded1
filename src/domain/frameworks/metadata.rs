//! Static descriptions of every framework input.
//!
//! Drives the per-input hint prompt and the read-only catalogue endpoint.

use serde::Serialize;

use super::FrameworkId;

/// How the input is presented to the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InputKind {
    Slider,
    ButtonGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputMetadata {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub low_label: &'static str,
    pub high_label: &'static str,
    pub kind: InputKind,
    /// Instructions for the AI coach when writing a hint for this input.
    pub hint_guidance: &'static str,
}

const COMPETITION: &[InputMetadata] = &[
    InputMetadata {
        id: "performancePressure",
        label: "Performance Pressure",
        description: "How much does the market demand continuous performance improvements?",
        low_label: "Commodity market",
        high_label: "Rapid innovation required",
        kind: InputKind::Slider,
        hint_guidance: "Help the student assess whether this industry rewards performance differentiation. Consider: How fast is the technology improving? Are customers willing to pay premiums for better performance? Is there a clear performance leader setting the pace?",
    },
    InputMetadata {
        id: "costPressure",
        label: "Cost Reduction Pressure",
        description: "How intense is the pressure to reduce costs in this component/capability?",
        low_label: "Premium tolerated",
        high_label: "Aggressive cost competition",
        kind: InputKind::Slider,
        hint_guidance: "Help the student think about pricing competition. Consider: Is the market commoditizing? Are margins shrinking across the industry? What are competitors doing to reduce costs? Is price the primary basis of competition?",
    },
];

const TECHNOLOGY: &[InputMetadata] = &[
    InputMetadata {
        id: "currentPhase",
        label: "Technology Lifecycle Phase",
        description: "Where is the current technology in its S-curve lifecycle?",
        low_label: "Early stage",
        high_label: "Approaching limits",
        kind: InputKind::ButtonGroup,
        hint_guidance: "Help the student identify where this technology sits on the S-curve. Consider: Is it nascent with rapid improvements still happening? Is it mature with predictable incremental gains? Is it approaching physical or practical limits? What evidence from the scenario suggests the technology maturity level?",
    },
    InputMetadata {
        id: "emergingThreat",
        label: "Emerging Alternative",
        description: "Is there an emerging alternative technology that could disrupt the current approach?",
        low_label: "No clear alternative",
        high_label: "New tech emerging",
        kind: InputKind::ButtonGroup,
        hint_guidance: "Help the student consider potential technological disruptions. Are there new technologies mentioned that could make the current approach obsolete? How mature and viable are the alternatives? What is the timeline for potential disruption?",
    },
];

const TRANSACTION_COST: &[InputMetadata] = &[
    InputMetadata {
        id: "assetSpecificity",
        label: "Asset Specificity",
        description: "How customized must this technology be for your specific needs?",
        low_label: "Generic / Off-the-shelf",
        high_label: "Highly customized",
        kind: InputKind::Slider,
        hint_guidance: "Help the student think about how specialized the required investments are. Could any standard component work, or are specific specifications needed? Would investments made for this relationship be useful outside it? Consider physical, human, site, and dedicated asset specificity.",
    },
    InputMetadata {
        id: "uncertainty",
        label: "Environmental Uncertainty",
        description: "How predictable is the future environment (regulatory, competitive, technological)?",
        low_label: "Stable / Predictable",
        high_label: "Volatile / Unpredictable",
        kind: InputKind::Slider,
        hint_guidance: "Help the student assess market and technological uncertainty. How predictable are requirements over the next 3-5 years? Consider regulatory changes, competitive dynamics, and technology evolution. High uncertainty makes it harder to write complete contracts.",
    },
    InputMetadata {
        id: "frequency",
        label: "Transaction Frequency",
        description: "How often will you need to procure/produce this component?",
        low_label: "Rare / One-time",
        high_label: "Continuous / Daily",
        kind: InputKind::Slider,
        hint_guidance: "Help the student think about transaction volume. Is this a one-time purchase, occasional procurement, or continuous supply need? High frequency combined with high specificity often favors making in-house to amortize governance costs.",
    },
];

const HOLD_UP_RISK: &[InputMetadata] = &[
    InputMetadata {
        id: "switchingCosts",
        label: "Switching Costs",
        description: "How costly would it be to switch suppliers or partners once committed?",
        low_label: "Easy to switch",
        high_label: "Very costly to switch",
        kind: InputKind::Slider,
        hint_guidance: "Help the student consider what would be lost if they needed to change partners. Are there sunk investments that cannot be recovered? Technical integration costs? Learning curve losses? Relationship-specific knowledge that would need to be rebuilt?",
    },
    InputMetadata {
        id: "relationshipSpecificity",
        label: "Relationship Specificity",
        description: "How much would your partner need to invest specifically for your relationship?",
        low_label: "Standard relationship",
        high_label: "Highly customized relationship",
        kind: InputKind::Slider,
        hint_guidance: "Help the student think about partner-specific investments. Would the supplier need to make investments that only benefit this relationship? Dedicated equipment, specialized personnel, co-located facilities? This creates mutual dependency but also potential hold-up.",
    },
    InputMetadata {
        id: "informationAsymmetry",
        label: "Information Asymmetry",
        description: "How much more does the potential partner know about costs and technology than you?",
        low_label: "Transparent information",
        high_label: "Significant asymmetry",
        kind: InputKind::Slider,
        hint_guidance: "Help the student assess knowledge gaps. Does the potential partner have proprietary knowledge that makes it hard to evaluate their claims or costs? Could they exploit this information advantage in negotiations? How would you verify their representations?",
    },
];

const BARGAINING: &[InputMetadata] = &[
    InputMetadata {
        id: "supplierPower",
        label: "Supplier Power",
        description: "How much leverage do potential suppliers/partners have?",
        low_label: "Many alternatives",
        high_label: "Few dominant suppliers",
        kind: InputKind::Slider,
        hint_guidance: "Help the student assess supplier concentration and differentiation. How many qualified suppliers exist for this capability? Are they differentiated or interchangeable? Do they have other large customers, or would you be important to them?",
    },
    InputMetadata {
        id: "buyerAlternatives",
        label: "Your Alternatives",
        description: "How many viable alternatives do you have for sourcing this capability?",
        low_label: "Few options",
        high_label: "Many good options",
        kind: InputKind::Slider,
        hint_guidance: "Help the student think about their negotiating leverage. Are there multiple suppliers they could realistically work with? Could they credibly threaten to make in-house or find other partners? What is their best alternative to a negotiated agreement (BATNA)?",
    },
    InputMetadata {
        id: "urgency",
        label: "Time Pressure",
        description: "How urgent is the need to secure this capability?",
        low_label: "Flexible timeline",
        high_label: "Urgent need",
        kind: InputKind::Slider,
        hint_guidance: "Help the student consider how time pressure affects their negotiating position. Urgency shifts power to the supplier. What is the cost of delay? Could competitors move faster? Are there market windows that could close?",
    },
];

const ADDITIONAL: &[InputMetadata] = &[
    InputMetadata {
        id: "timeHorizon",
        label: "Strategic Time Horizon",
        description: "What is your strategic planning timeframe for this decision?",
        low_label: "Short-term (<2 years)",
        high_label: "Long-term (5+ years)",
        kind: InputKind::ButtonGroup,
        hint_guidance: "Help the student think about urgency vs. long-term strategic importance. Short horizons favor buying for speed; long horizons make building internal capabilities more valuable. What is the expected duration of need for this capability?",
    },
    InputMetadata {
        id: "capabilityGap",
        label: "Capability Gap",
        description: "How large is the gap between your current capabilities and what is needed?",
        low_label: "Already capable",
        high_label: "Major gap to close",
        kind: InputKind::Slider,
        hint_guidance: "Help the student honestly assess internal capabilities. What skills, equipment, and resources are missing? How difficult would they be to build or acquire? How long would it take? What is the organization's track record building new capabilities?",
    },
    InputMetadata {
        id: "optionality",
        label: "Strategic Optionality",
        description: "How valuable is it to maintain flexibility and multiple options?",
        low_label: "Commitment is fine",
        high_label: "Flexibility is crucial",
        kind: InputKind::Slider,
        hint_guidance: "Help the student think about keeping options open vs. committing. What would each choice foreclose? Are there potential pivots or changes in strategy that would be harder after committing? Consider market uncertainty, technology changes, and strategic flexibility.",
    },
];

/// Inputs of a framework, in presentation order.
pub fn inputs_for(framework: FrameworkId) -> &'static [InputMetadata] {
    match framework {
        FrameworkId::Competition => COMPETITION,
        FrameworkId::Technology => TECHNOLOGY,
        FrameworkId::TransactionCost => TRANSACTION_COST,
        FrameworkId::HoldUpRisk => HOLD_UP_RISK,
        FrameworkId::Bargaining => BARGAINING,
        FrameworkId::Additional => ADDITIONAL,
    }
}

/// Looks up a single input by its identifier.
pub fn input_metadata(framework: FrameworkId, input_id: &str) -> Option<&'static InputMetadata> {
    inputs_for(framework).iter().find(|input| input.id == input_id)
}

/// Catalogue entry for one framework.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkDescriptor {
    pub id: FrameworkId,
    pub title: &'static str,
    pub short_title: &'static str,
    pub description: &'static str,
    pub order: u8,
    pub inputs: &'static [InputMetadata],
}

impl From<FrameworkId> for FrameworkDescriptor {
    fn from(id: FrameworkId) -> Self {
        Self {
            id,
            title: id.title(),
            short_title: id.display_name(),
            description: id.description(),
            order: id.order(),
            inputs: inputs_for(id),
        }
    }
}

/// The full framework catalogue in exercise order.
pub fn catalogue() -> Vec<FrameworkDescriptor> {
    FrameworkId::ALL.into_iter().map(FrameworkDescriptor::from).collect()
}
