//! Strict decoding of model output.
//!
//! Models are asked for bare JSON but sometimes wrap it in a markdown code
//! fence. The fence is stripped; anything else that is not the requested
//! shape is a [`ParseError`].

use serde::de::DeserializeOwned;

use crate::ports::ParseError;

/// Removes a surrounding ```` ``` ```` or ```` ```json ```` fence, if present.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json", "JSON", ...) up to the first newline.
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

/// Decodes `text` as JSON of type `T`.
pub fn decode_json<T: DeserializeOwned>(operation: &'static str, text: &str) -> Result<T, ParseError> {
    let body = strip_code_fences(text);
    if body.is_empty() {
        return Err(ParseError::empty(operation));
    }
    serde_json::from_str(body).map_err(|e| ParseError::invalid_json(operation, e.to_string()))
}

/// Plain-text responses: trimmed, and must not be empty.
pub fn decode_text(operation: &'static str, text: &str) -> Result<String, ParseError> {
    let body = text.trim();
    if body.is_empty() {
        return Err(ParseError::empty(operation));
    }
    Ok(body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        title: String,
    }

    #[test]
    fn plain_json_passes_through() {
        assert_eq!(strip_code_fences("  {\"a\":1}\n"), "{\"a\":1}");
    }

    #[test]
    fn json_fence_is_stripped() {
        let text = "```json\n{\"title\": \"x\"}\n```";
        assert_eq!(strip_code_fences(text), "{\"title\": \"x\"}");

        let sample: Sample = decode_json("op", text).unwrap();
        assert_eq!(sample.title, "x");
    }

    #[test]
    fn bare_fence_is_stripped() {
        assert_eq!(strip_code_fences("```\n[1, 2]\n```"), "[1, 2]");
    }

    #[test]
    fn unterminated_fence_keeps_body() {
        assert_eq!(strip_code_fences("```json\n{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn prose_is_rejected() {
        let err = decode_json::<Sample>("parse_scenario", "Here is your scenario: {}").unwrap_err();
        assert!(matches!(err, ParseError::InvalidJson { operation: "parse_scenario", .. }));
    }

    #[test]
    fn wrong_shape_is_rejected() {
        assert!(decode_json::<Sample>("op", "{\"name\": \"x\"}").is_err());
    }

    #[test]
    fn empty_output_is_reported() {
        assert_eq!(
            decode_json::<Sample>("op", "```json\n```").unwrap_err(),
            ParseError::empty("op")
        );
        assert_eq!(decode_text("hint", "  \n ").unwrap_err(), ParseError::empty("hint"));
    }

    #[test]
    fn text_is_trimmed() {
        assert_eq!(decode_text("hint", "\n Think about it.\n").unwrap(), "Think about it.");
    }
}
