//! Prompt templates for the AI coach.
//!
//! Templates use `{name}` placeholders filled by the `render_*` functions.
//! Every template that expects structured output asks for bare JSON; the
//! response parser still tolerates markdown fences.

use serde_json::{json, Value};

use crate::domain::exercise::{Scenario, SourceType};
use crate::domain::frameworks::{inputs_for, FrameworkId};

pub const SCENARIO_PARSING_PROMPT: &str = r#"You are an expert in technology strategy designing a Make-Buy-Partner case exercise for MBA students. Your task is to read the provided content and create a compelling strategic dilemma for students to analyze.

From the input text, identify a specific technology, component, capability, or service that could be the subject of a make-buy-partner decision. Then frame it as a clear strategic question.

Create:
1. **title**: A concise, descriptive title for the decision scenario (e.g., "[Company] [Component/Capability] Strategy")

2. **summary**: Frame this as a STRATEGIC QUESTION that students must answer. Write 2-3 sentences that:
   - Name the company and the specific decision they face
   - Clearly state the three options: develop in-house (MAKE), purchase/outsource (BUY), or form a strategic partnership/JV (PARTNER)
   - Convey why this decision matters strategically
   - End with or imply the question: "Should they make, buy, or partner?"

   Example format: "[Company] faces a critical decision regarding [component/capability]. They could develop it in-house, purchase from vendors like [examples], or form a strategic partnership. Given [key tension], what approach should they take?"

3. **context**: Provide 2-3 sentences of background on the company, industry dynamics, and competitive landscape that make this decision important.

4. **keyFactors**: List 4-6 specific factors from the content that will influence the make-buy-partner analysis (technology maturity, competitive dynamics, supplier landscape, internal capabilities, etc.)

5. **stakeholders**: List the key parties affected by or involved in this decision

6. **constraints**: List practical constraints (time, capital, expertise, market conditions) that bound the decision

Return ONLY a valid JSON object with this exact structure (no markdown, no explanation, just the JSON):
{
  "title": "string",
  "summary": "string",
  "context": "string",
  "keyFactors": ["string"],
  "stakeholders": ["string"],
  "constraints": ["string"]
}

Important: The summary MUST frame a clear strategic dilemma as a question for the student to resolve. Make it engaging and thought-provoking. If the content doesn't explicitly describe a make-buy-partner situation, infer a relevant one based on the technologies, capabilities, or components discussed.

Remember: respond with ONLY the JSON object, nothing else."#;

pub const HINT_GENERATION_PROMPT: &str = r#"You are a supportive professor guiding an MBA student through a Make-Buy-Partner analysis. Your role is to provide detailed, scenario-specific hints that help the student apply the framework correctly to their case.

## Scenario Being Analyzed
{scenario}

## Framework Being Analyzed: {framework}

## Student's Current Framework Inputs
{inputs}

## Framework-Specific Guidance

Based on the framework "{framework}", provide detailed hints using the guidance below:

**If framework is "competition":**
- PERFORMANCE PRESSURE: Help the student think about whether this scenario involves rapidly evolving technology where differentiation drives competitive advantage. Ask them to consider: How fast is the technology improving? Are customers willing to pay premium prices for better performance? Reference specific aspects of their scenario.
- COST PRESSURE: Guide them to think about pricing competition in this industry. Is the market commoditizing? Are margins shrinking? What are competitors doing to reduce costs?
- Connect these pressures to the specific company and industry in the scenario.

**If framework is "technology":**
- S-CURVE POSITION: Help them identify where this specific technology sits on the S-curve. Is it nascent (still being figured out), growing (rapid improvements happening), maturing (approaching physical/practical limits), or declining?
- Ask them to consider: What evidence from the scenario suggests the technology's maturity level? Are there diminishing returns to R&D investments? Is a discontinuity or new technology emerging?
- Reference the specific technology/capability from their scenario.

**If framework is "transactionCost":**
- ASSET SPECIFICITY: Help them think about how specialized the required assets/investments are. Would investments in this capability be useful outside this specific relationship? Reference the specific technology or capability.
- UNCERTAINTY: Guide them to assess market and technological uncertainty. How predictable are requirements over the next 3-5 years?
- FREQUENCY: How often will transactions occur? High frequency + high specificity often favors making.
- Reference Coase and Williamson's insights about when markets vs. hierarchies are more efficient.

**If framework is "holdUpRisk":**
- Help them identify specific ways a supplier or partner could exploit a dependency. What investments would be "sunk" once made?
- Ask them to consider: How many alternative suppliers exist? What would switching cost? Could the partner use information asymmetry against them?
- Reference the specific stakeholders and power dynamics from their scenario.

**If framework is "bargaining":**
- SUPPLIER POWER: Help them assess concentration, switching costs, and differentiation among potential suppliers in this scenario.
- BUYER POWER: Guide them to think about their leverage. Are they an important customer? Do they have alternatives?
- How might power dynamics shift over time as investments are made?
- Reference the specific suppliers, partners, or capabilities mentioned in the scenario.

**If framework is "additional":**
- TIME HORIZON: Help them think about urgency vs. long-term strategic importance. What's the cost of delay?
- CAPABILITY GAPS: Guide them to honestly assess what capabilities they lack and how hard those are to build.
- OPTIONALITY: Help them think about keeping options open vs. committing. What would each choice foreclose?
- REVERSIBILITY: How hard would it be to switch strategies later?

## Your Response Format

IMPORTANT: Output ONLY plain text. Do NOT use markdown formatting (no #, **, *, or other markdown syntax). Use simple line breaks and dashes for structure.

Structure your hint like this:

[Opening observation about their specific scenario - 1-2 sentences referencing the company/technology by name]

Questions to consider:
- [First scenario-specific question]
- [Second scenario-specific question]
- [Optional third question if relevant]

[Brief explanation of why this matters for their situation - 1-2 sentences connecting the framework concept to their case]

Things to think about from your scenario:
- [Relevant factor from their keyFactors]
- [Another relevant consideration]

---

Length: Keep it focused but substantive. Be specific and reference their actual scenario by name. Never give the "right" answer directly, but help them think through the relevant considerations systematically.

Tone: Warm, professorial, encouraging. You're guiding them to discover insights, not lecturing."#;

pub const ANALYSIS_PROMPT: &str = r#"You are an expert in technology strategy analyzing a Make-Buy-Partner decision. Based on the student's inputs across all frameworks, provide a comprehensive analysis.

Scenario: {scenario}
Student's initial stance: {stance}
Framework responses: {frameworks}

For each framework, determine:
1. What decision it suggests (make, buy, partner, or inconclusive)
2. Confidence level (0-100%)
3. Brief reasoning (1-2 sentences)

Then calculate weighted recommendations:
- Weight frameworks based on relevance to this specific scenario
- If frameworks conflict significantly (within 10% of each other), note this as a judgment call

Return ONLY a valid JSON object (no markdown, no explanation, just the JSON):
{
  "frameworkResults": [
    {"framework": "string", "recommendation": "make|buy|partner|inconclusive", "confidence": number, "reasoning": "string"}
  ],
  "weightedResult": {"make": number, "buy": number, "partner": number},
  "primaryRecommendation": "make|buy|partner",
  "conflictingFrameworks": boolean
}

Remember: respond with ONLY the JSON object, nothing else."#;

pub const FEEDBACK_PROMPT: &str = r#"You are a professor providing constructive feedback on a student's Make-Buy-Partner analysis.

Scenario: {scenario}
Student's initial stance: {stance} with reasoning: "{reasoning}"
Systematic analysis result: {analysis}

Provide feedback that:
1. Acknowledges what the student's intuition got right (strengths)
2. Highlights important considerations the frameworks revealed
3. Gently identifies any flawed assumptions or reasoning gaps

Be specific to THEIR reasoning, not generic. Reference their actual words.

If their initial stance matched the analysis, celebrate the alignment while noting what frameworks confirmed.
If they differed, explain the key factors that systematic analysis revealed.

Return ONLY a valid JSON array (no markdown, no explanation, just the JSON):
[
  {"type": "strength|consideration|flaw", "title": "string", "description": "string"}
]

Limit to 3-5 items total. Be encouraging but honest. Remember: respond with ONLY the JSON array, nothing else."#;

pub const INPUT_HINTS_PROMPT: &str = r#"You are a supportive professor guiding an MBA student through a Make-Buy-Partner analysis. Generate concise, scenario-specific hints for each input dimension in this framework.

## Scenario Being Analyzed
{scenario}

## Framework: {framework}

## Inputs to Generate Hints For
{inputsMetadata}

## Instructions

For EACH input listed above, generate a hint that:
1. Opens with a brief observation connecting THIS SPECIFIC SCENARIO to this dimension (1 sentence, reference the company/technology by name)
2. Provides 2-3 thought-provoking questions specific to their scenario
3. Closes with a brief note on why this dimension matters for their make-buy-partner decision (1 sentence)

Keep each hint to 80-120 words. Be warm and professorial. Reference the company and technology by name. Never give the "right" answer directly - help them think through the relevant considerations.

IMPORTANT: Output ONLY plain text in each hint. Do NOT use markdown formatting (no #, **, *, or other markdown syntax). Use simple line breaks for structure.

## Response Format

Return ONLY a valid JSON object mapping input IDs to hint text:
{
  "inputId1": "hint text here...",
  "inputId2": "hint text here..."
}

Remember: respond with ONLY the JSON object, nothing else."#;

/// Scenario fields shared with the hint prompts.
fn scenario_context(scenario: &Scenario, with_people: bool) -> Value {
    let mut context = json!({
        "title": scenario.title,
        "summary": scenario.summary,
        "context": scenario.context,
        "keyFactors": scenario.key_factors,
    });
    if with_people {
        context["stakeholders"] = json!(scenario.stakeholders);
        context["constraints"] = json!(scenario.constraints);
    }
    context
}

/// User message for scenario parsing; the system prompt is
/// [`SCENARIO_PARSING_PROMPT`].
pub fn render_scenario_input(input: &str, source_type: SourceType) -> String {
    format!("Source type: {}\n\nContent:\n{}", source_type.as_str(), input)
}

pub fn render_hint(framework: FrameworkId, scenario: &Scenario, inputs: &Value) -> String {
    HINT_GENERATION_PROMPT
        .replace("{framework}", framework.as_str())
        .replace("{scenario}", &format!("{:#}", scenario_context(scenario, true)))
        .replace("{inputs}", &format!("{:#}", inputs))
}

/// One line per input: id, label, description and hint guidance.
pub fn describe_inputs(framework: FrameworkId) -> String {
    inputs_for(framework)
        .iter()
        .map(|meta| {
            format!(
                "- {}: \"{}\" - {}\n  Guidance: {}",
                meta.id, meta.label, meta.description, meta.hint_guidance
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_input_hints(framework: FrameworkId, scenario: &Scenario) -> String {
    INPUT_HINTS_PROMPT
        .replace("{framework}", framework.as_str())
        .replace("{scenario}", &format!("{:#}", scenario_context(scenario, false)))
        .replace("{inputsMetadata}", &describe_inputs(framework))
}

/// `frameworks` is the serialized `FrameworkAnswers`.
pub fn render_analysis(scenario: &Scenario, stance: &str, frameworks: &Value) -> String {
    let scenario = json!({
        "title": scenario.title,
        "summary": scenario.summary,
        "context": scenario.context,
    });
    ANALYSIS_PROMPT
        .replace("{scenario}", &scenario.to_string())
        .replace("{stance}", stance)
        .replace("{frameworks}", &frameworks.to_string())
}

/// `analysis` carries the primary recommendation and weighted split.
pub fn render_feedback(
    scenario: &Scenario,
    stance: &str,
    reasoning: &str,
    analysis: &Value,
) -> String {
    let scenario = json!({
        "title": scenario.title,
        "summary": scenario.summary,
    });
    // Reasoning goes last so learner text cannot inject placeholders.
    FEEDBACK_PROMPT
        .replace("{scenario}", &scenario.to_string())
        .replace("{stance}", stance)
        .replace("{analysis}", &analysis.to_string())
        .replace("{reasoning}", reasoning)
}
