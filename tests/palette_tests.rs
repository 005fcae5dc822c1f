//! Palette generation through stub generators and canned model output.

use std::sync::Arc;

use colorspeak::models::{ColorRole, PaletteDraft, RgbColor};
use colorspeak::palette::schema::{extract_text, request_body};
use colorspeak::palette::{
    decode_palette, GenerationJob, JobStatus, PaletteError, PaletteGenerator,
};
use colorspeak::preview::RoleStyles;

/// Response envelope as the service returns it, wrapping `text`.
fn envelope(text: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": {"parts": [{"text": text}], "role": "model"},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"totalTokenCount": 321}
    })
    .to_string()
}

const MODEL_TEXT: &str = r##"{
  "name": "Cyber Neon",
  "description": "Glowing signage over wet asphalt",
  "colors": [
    {"hex": "#FF2A6D", "name": "Neon Pink", "role": "primary", "description": "Signage"},
    {"hex": "#05D9E8", "name": "Electric Cyan", "role": "accent", "description": "Highlights"},
    {"hex": "#01012B", "name": "Midnight", "role": "background", "description": "Night sky"},
    {"hex": "#D1F7FF", "name": "Ice", "role": "text_main", "description": "Readable"}
  ],
  "mood": "electric"
}"##;

/// Replays a canned response body.
struct Replay(String);

impl PaletteGenerator for Replay {
    fn generate(&self, prompt: &str) -> Result<PaletteDraft, PaletteError> {
        if prompt.trim().is_empty() {
            return Err(PaletteError::EmptyPrompt);
        }
        decode_palette(&extract_text(&self.0)?)
    }
}

#[test]
fn test_envelope_to_role_styles() {
    let mut job = GenerationJob::new();
    job.start(Arc::new(Replay(envelope(MODEL_TEXT))), "cyberpunk")
        .unwrap();

    let palette = job.wait().unwrap().unwrap();
    assert_eq!(job.status(), JobStatus::Succeeded);
    assert_eq!(palette.name, "Cyber Neon");
    assert_eq!(palette.colors.len(), 4);

    let styles = RoleStyles::from_palette(&palette);
    assert_eq!(styles.primary, RgbColor::new(0xFF, 0x2A, 0x6D));
    // Roles the model skipped paint black
    assert_eq!(styles.get(ColorRole::Surface), RgbColor::BLACK);
    assert_eq!(styles.text_muted, RgbColor::BLACK);
}

#[test]
fn test_missing_colors_fails_job() {
    let text = r#"{"name": "Half", "description": "No colours"}"#;
    let mut job = GenerationJob::new();
    job.start(Arc::new(Replay(envelope(text))), "anything")
        .unwrap();

    let err = job.wait().unwrap().unwrap_err();
    assert!(matches!(err, PaletteError::InvalidFormat(_)));
    assert_eq!(job.status(), JobStatus::Failed);
}

#[test]
fn test_empty_candidates_is_no_response() {
    let body = serde_json::json!({"candidates": []}).to_string();
    let err = Replay(body).generate("forest").unwrap_err();
    assert_eq!(err.to_string(), "No response from Gemini");
}

#[test]
fn test_request_names_every_role() {
    let body = request_body("ocean breeze");
    let text = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(text.contains("ocean breeze"));
    for role in ColorRole::ALL {
        assert!(text.contains(role.as_str()), "{role} missing from prompt");
    }
    assert_eq!(
        body["generationConfig"]["responseMimeType"],
        "application/json"
    );
}
