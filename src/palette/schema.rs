//! Wire format of the generateContent call.
//!
//! The request asks for JSON constrained by a response schema; the reply
//! wraps the model's JSON text in candidate/part envelopes.

use serde::Deserialize;
use serde_json::{json, Value};

use super::PaletteError;
use crate::models::{ColorRole, PaletteDraft, RgbColor};

/// Builds the instruction text sent to the model.
#[must_use]
pub fn build_prompt(prompt: &str) -> String {
    let mut text = format!(
        "Generate a cohesive and beautiful color palette based on this description: \"{prompt}\".\n\
         Ensure high contrast and usability for UI design.\n\
         The palette MUST strictly include colors for these specific roles:\n"
    );
    for (n, role) in ColorRole::ALL.iter().enumerate() {
        text.push_str(&format!("{}. {} ({})\n", n + 1, role.as_str(), role.purpose()));
    }
    text.push_str("\nProvide a creative name for the palette and a short description of the vibe.\n");
    text
}

/// Schema the model's JSON must follow.
#[must_use]
pub fn response_schema() -> Value {
    let roles: Vec<&str> = ColorRole::ALL.iter().map(|r| r.as_str()).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING", "description": "Creative name for the palette" },
            "description": { "type": "STRING", "description": "Short description of the vibe" },
            "colors": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "hex": { "type": "STRING", "description": "Hex code e.g. #FF5500" },
                        "name": { "type": "STRING", "description": "Creative color name" },
                        "role": { "type": "STRING", "enum": roles },
                        "description": { "type": "STRING", "description": "Why this color fits the role" }
                    },
                    "required": ["hex", "name", "role", "description"]
                }
            }
        },
        "required": ["name", "description", "colors"]
    })
}

/// Full request body for `prompt`.
#[must_use]
pub fn request_body(prompt: &str) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": build_prompt(prompt) }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema()
        }
    })
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

/// Pulls the model's text out of a generateContent reply.
///
/// Text parts of the first candidate are concatenated. A reply without any
/// text is [`PaletteError::EmptyResponse`].
pub fn extract_text(body: &str) -> Result<String, PaletteError> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| PaletteError::InvalidFormat(format!("envelope: {e}")))?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(PaletteError::EmptyResponse);
    }
    Ok(text)
}

/// Decodes the model's JSON text into a palette draft.
///
/// Every field the schema requires must be present and every role must be
/// one of the known roles. Hex codes must be `#RRGGBB`. Unknown extra keys
/// are ignored.
pub fn decode_palette(text: &str) -> Result<PaletteDraft, PaletteError> {
    if text.trim().is_empty() {
        return Err(PaletteError::EmptyResponse);
    }

    let draft: PaletteDraft =
        serde_json::from_str(text).map_err(|e| PaletteError::InvalidFormat(e.to_string()))?;

    for color in &draft.colors {
        if !is_full_hex(&color.hex) {
            return Err(PaletteError::InvalidFormat(format!(
                "colour '{}' has invalid hex code '{}'",
                color.name, color.hex
            )));
        }
    }

    Ok(draft)
}

fn is_full_hex(hex: &str) -> bool {
    hex.len() == 7 && hex.starts_with('#') && RgbColor::from_hex(hex).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "name": "Sunset Boulevard",
        "description": "Warm dusk tones",
        "colors": [
            {"hex": "#FF5500", "name": "Ember", "role": "primary", "description": "Bold"},
            {"hex": "#1A1A2E", "name": "Night", "role": "background", "description": "Deep"},
            {"hex": "#EAEAEA", "name": "Mist", "role": "text_main", "description": "Readable"}
        ]
    }"##;

    #[test]
    fn test_decode_valid_palette() {
        let draft = decode_palette(SAMPLE).unwrap();
        assert_eq!(draft.name, "Sunset Boulevard");
        assert_eq!(draft.colors.len(), 3);
        assert_eq!(draft.colors[2].role, ColorRole::TextMain);
    }

    #[test]
    fn test_decode_missing_colors_is_invalid() {
        let err = decode_palette(r#"{"name": "X", "description": "Y"}"#).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidFormat(_)));
        assert!(err.to_string().starts_with("Invalid response format"));
    }

    #[test]
    fn test_decode_unknown_role_is_invalid() {
        let text = r##"{"name":"X","description":"Y","colors":[
            {"hex":"#000000","name":"Ink","role":"border","description":"?"}]}"##;
        assert!(matches!(
            decode_palette(text),
            Err(PaletteError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_decode_bad_hex_is_invalid() {
        for hex in ["FF5500", "#F50", "#GG0000", "#FF55001"] {
            let text = format!(
                r#"{{"name":"X","description":"Y","colors":[
                    {{"hex":"{hex}","name":"C","role":"accent","description":"D"}}]}}"#
            );
            assert!(
                matches!(decode_palette(&text), Err(PaletteError::InvalidFormat(_))),
                "{hex} should be rejected"
            );
        }
    }

    #[test]
    fn test_decode_tolerates_extra_keys() {
        let text = r##"{"name":"X","description":"Y","mood":"calm","colors":[
            {"hex":"#123456","name":"C","role":"surface","description":"D","alpha":1}]}"##;
        assert_eq!(decode_palette(text).unwrap().colors.len(), 1);
    }

    #[test]
    fn test_decode_empty_text() {
        assert!(matches!(decode_palette("  "), Err(PaletteError::EmptyResponse)));
        assert!(matches!(
            decode_palette("not json"),
            Err(PaletteError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"{\"a\":"},{"text":"1}"}]}}]}"#;
        assert_eq!(extract_text(body).unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn test_extract_text_without_candidates() {
        assert!(matches!(
            extract_text(r#"{"candidates":[]}"#),
            Err(PaletteError::EmptyResponse)
        ));
        assert!(matches!(
            extract_text(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#),
            Err(PaletteError::EmptyResponse)
        ));
    }

    #[test]
    fn test_request_body_shape() {
        let body = request_body("ocean at dawn");
        let text = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(text.contains("\"ocean at dawn\""));
        assert!(text.contains("7. text_muted (Lower contrast text)"));
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        let roles = &body["generationConfig"]["responseSchema"]["properties"]["colors"]["items"]
            ["properties"]["role"]["enum"];
        assert_eq!(roles.as_array().unwrap().len(), 7);
    }
}
