//! Gemini `generateContent` payload types.

use serde::{Deserialize, Serialize};

/// Returned when a response carries no text at any level.
pub const NO_RESPONSE: &str = "No response from AI";

/// Gemini content container used in both requests and responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<Part>>,
}

/// A single content part. Non-text parts deserialize with `text: None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// `systemInstruction` block; carries parts only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInstruction {
    pub parts: Vec<Part>,
}

/// Top-level `generateContent` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<SystemInstruction>,
}

impl GenerateContentRequest {
    /// Builds a single user turn. Instructions that are absent or blank are
    /// left out of the request entirely.
    pub fn new(prompt: &str, system_instructions: Option<&str>) -> Self {
        let system_instruction = system_instructions
            .filter(|s| !s.trim().is_empty())
            .map(|s| SystemInstruction {
                parts: vec![Part::text(s)],
            });

        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: Some(vec![Part::text(prompt)]),
            }],
            system_instruction,
        }
    }
}

/// Top-level `generateContent` response envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

/// Candidate completion item returned by Gemini.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenates every text fragment across all candidates and parts, in
    /// document order. Falls back to [`NO_RESPONSE`] when there is none.
    pub fn text(&self) -> String {
        let mut fragments = self
            .candidates
            .iter()
            .flatten()
            .filter_map(|c| c.content.as_ref())
            .filter_map(|c| c.parts.as_ref())
            .flatten()
            .filter_map(|p| p.text.as_deref())
            .peekable();

        if fragments.peek().is_none() {
            return NO_RESPONSE.to_string();
        }

        fragments.collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_request_omits_system_instruction_when_absent() {
        let request = GenerateContentRequest::new("hello", None);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({ "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }] })
        );
    }

    #[test]
    fn test_request_omits_blank_system_instruction() {
        for blank in ["", "   ", "\n\t"] {
            let value = serde_json::to_value(GenerateContentRequest::new("hi", Some(blank))).unwrap();
            assert!(value.get("systemInstruction").is_none());
        }
    }

    #[test]
    fn test_request_includes_system_instruction() {
        let request = GenerateContentRequest::new("hi", Some("be brief"));
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value["systemInstruction"],
            json!({ "parts": [{ "text": "be brief" }] })
        );
    }

    #[test]
    fn test_text_concatenates_all_candidates_and_parts() {
        let response = parse(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "Bring " }, { "text": "an " }] } },
                { "content": { "parts": [{ "text": "umbrella." }] } }
            ],
            "usageMetadata": { "totalTokenCount": 12 }
        }));

        assert_eq!(response.text(), "Bring an umbrella.");
    }

    #[test]
    fn test_text_skips_missing_fragments() {
        let response = parse(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "a" }, { "inlineData": { "mimeType": "image/png", "data": "" } }] } },
                { "finishReason": "SAFETY" },
                { "content": { "parts": null } },
                { "content": { "parts": [{ "text": "b" }] } }
            ]
        }));

        assert_eq!(response.text(), "ab");
    }

    #[test]
    fn test_text_returns_sentinel_when_nothing_present() {
        let shapes = [
            json!({}),
            json!({ "candidates": null }),
            json!({ "candidates": [] }),
            json!({ "candidates": [{}] }),
            json!({ "candidates": [{ "content": {} }] }),
            json!({ "candidates": [{ "content": { "parts": [] } }] }),
            json!({ "candidates": [{ "content": { "parts": [{}] } }] }),
        ];

        for shape in shapes {
            assert_eq!(parse(shape).text(), NO_RESPONSE);
        }
    }

    #[test]
    fn test_text_keeps_empty_fragment() {
        let response = parse(json!({ "candidates": [{ "content": { "parts": [{ "text": "" }] } }] }));
        assert_eq!(response.text(), "");
    }
}
