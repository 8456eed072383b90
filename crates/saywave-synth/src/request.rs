//! Boundary types for synthesis requests.
//!
//! A [`SynthesisRequest`] is created at the system boundary (typically an
//! HTTP handler), validated once, and consumed by a single render. The core
//! accepts exactly two language tags, `"en"` and `"zh"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};

/// Maximum accepted text length in characters (inclusive).
pub const MAX_TEXT_CHARS: usize = 5000;

/// Supported narration languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English.
    #[serde(rename = "en")]
    En,
    /// Mandarin Chinese.
    #[serde(rename = "zh")]
    Zh,
}

impl Language {
    /// Returns the wire tag for this language.
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "zh" => Ok(Language::Zh),
            other => Err(SynthError::invalid_language(other)),
        }
    }
}

/// A validated request for one speech render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisRequest {
    /// Text to narrate (1..=5000 characters).
    pub text: String,
    /// Narration language.
    pub language: Language,
    /// Optional named voice layered over the language default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    /// Optional explicit RNG seed. When absent the seed is derived from
    /// `(text, language)` so repeated renders are byte-identical.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

impl SynthesisRequest {
    /// Creates a request with the language default voice.
    pub fn new(text: impl Into<String>, language: Language) -> Self {
        Self {
            text: text.into(),
            language,
            voice: None,
            seed: None,
        }
    }

    /// Sets a named voice.
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }

    /// Sets an explicit RNG seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the request.
    ///
    /// Runs before any synthesis work: an over-long text is rejected here,
    /// never truncated.
    pub fn validate(&self) -> SynthResult<()> {
        if self.text.is_empty() {
            return Err(SynthError::invalid_text("text is empty"));
        }
        let chars = self.text.chars().count();
        if chars > MAX_TEXT_CHARS {
            return Err(SynthError::invalid_text(format!(
                "text is too long: {} characters (maximum {})",
                chars, MAX_TEXT_CHARS
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_round_trip() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("zh".parse::<Language>().unwrap(), Language::Zh);
        assert_eq!(Language::En.tag(), "en");
        assert_eq!(Language::Zh.tag(), "zh");
    }

    #[test]
    fn test_language_rejects_unknown_tag() {
        let err = "fr".parse::<Language>().unwrap_err();
        assert!(matches!(err, SynthError::InvalidLanguage { ref tag } if tag == "fr"));
    }

    #[test]
    fn test_language_serde_tags() {
        let json = serde_json::to_string(&Language::Zh).unwrap();
        assert_eq!(json, "\"zh\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }

    #[test]
    fn test_validate_empty_text() {
        let request = SynthesisRequest::new("", Language::En);
        assert!(matches!(
            request.validate(),
            Err(SynthError::InvalidText { .. })
        ));
    }

    #[test]
    fn test_validate_length_limit_inclusive() {
        let at_limit = SynthesisRequest::new("a".repeat(MAX_TEXT_CHARS), Language::En);
        assert!(at_limit.validate().is_ok());

        let over_limit = SynthesisRequest::new("a".repeat(MAX_TEXT_CHARS + 1), Language::En);
        assert!(matches!(
            over_limit.validate(),
            Err(SynthError::InvalidText { .. })
        ));
    }

    #[test]
    fn test_limit_counts_characters_not_bytes() {
        // 5000 CJK characters exceed 5000 bytes but are within the limit.
        let request = SynthesisRequest::new("好".repeat(MAX_TEXT_CHARS), Language::Zh);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_from_json() {
        let request: SynthesisRequest =
            serde_json::from_str(r#"{"text": "Hello world", "language": "en"}"#).unwrap();
        assert_eq!(request.text, "Hello world");
        assert_eq!(request.language, Language::En);
        assert!(request.voice.is_none());
        assert!(request.seed.is_none());
    }
}
