//! Request side of `speech:recognize`.
//!
//! Every optional field is an `Option` and is left out of the JSON when `None`,
//! so the service applies its own default.

use super::enums::{AudioEncoding, RecognitionModel};
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Top-level request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizeRequest {
    /// How the recognizer should process the request.
    pub config: RecognitionConfig,
    /// The audio to recognize.
    pub audio: RecognitionAudio,
}

impl RecognizeRequest {
    pub fn new(config: RecognitionConfig, audio: RecognitionAudio) -> Self {
        Self { config, audio }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionConfig {
    /// Optional for FLAC and WAV, required for every other format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<AudioEncoding>,
    /// Valid values are 8000-48000; 16000 is optimal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate_hertz: Option<u32>,
    /// Only set for multi-channel audio. Valid range depends on the encoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_channel_count: Option<u32>,
    /// Without this only the first channel is recognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_separate_recognition_per_channel: Option<bool>,
    /// BCP-47 tag, e.g. "en-US".
    pub language_code: String,
    /// 0-30. Zero or unset returns at most one alternative.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_alternatives: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profanity_filter: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech_contexts: Option<Vec<SpeechContext>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_word_time_offsets: Option<bool>,
    /// Only honored for some languages; no effect elsewhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_automatic_punctuation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<RecognitionModel>,
    /// Falls back to the standard model when no enhanced variant exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_enhanced: Option<bool>,
}

impl RecognitionConfig {
    /// Config with only the required language code set.
    pub fn new(language_code: impl Into<String>) -> Self {
        Self {
            encoding: None,
            sample_rate_hertz: None,
            audio_channel_count: None,
            enable_separate_recognition_per_channel: None,
            language_code: language_code.into(),
            max_alternatives: None,
            profanity_filter: None,
            speech_contexts: None,
            enable_word_time_offsets: None,
            enable_automatic_punctuation: None,
            model: None,
            use_enhanced: None,
        }
    }

    pub fn with_encoding(mut self, encoding: AudioEncoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    pub fn with_sample_rate_hertz(mut self, hz: u32) -> Self {
        self.sample_rate_hertz = Some(hz);
        self
    }

    pub fn with_audio_channel_count(mut self, channels: u32) -> Self {
        self.audio_channel_count = Some(channels);
        self
    }

    pub fn with_separate_recognition_per_channel(mut self, enable: bool) -> Self {
        self.enable_separate_recognition_per_channel = Some(enable);
        self
    }

    pub fn with_max_alternatives(mut self, n: u32) -> Self {
        self.max_alternatives = Some(n);
        self
    }

    pub fn with_profanity_filter(mut self, enable: bool) -> Self {
        self.profanity_filter = Some(enable);
        self
    }

    /// Appends a context, keeping earlier ones in order.
    pub fn with_speech_context(mut self, context: SpeechContext) -> Self {
        self.speech_contexts.get_or_insert_with(Vec::new).push(context);
        self
    }

    pub fn with_speech_contexts(mut self, contexts: Vec<SpeechContext>) -> Self {
        self.speech_contexts = Some(contexts);
        self
    }

    pub fn with_word_time_offsets(mut self, enable: bool) -> Self {
        self.enable_word_time_offsets = Some(enable);
        self
    }

    pub fn with_automatic_punctuation(mut self, enable: bool) -> Self {
        self.enable_automatic_punctuation = Some(enable);
        self
    }

    pub fn with_model(mut self, model: RecognitionModel) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_use_enhanced(mut self, enable: bool) -> Self {
        self.use_enhanced = Some(enable);
        self
    }
}

/// Phrase hints. Items may also be class tokens such as `$MONTH`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechContext {
    #[serde(default)]
    pub phrases: Vec<String>,
}

impl SpeechContext {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
        }
    }
}

/// Audio payload. `content` is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionAudio {
    /// Base64 of the raw audio bytes, in the encoding named by the config.
    pub content: String,
}

impl RecognitionAudio {
    pub fn from_base64(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Encodes raw bytes with the standard base64 alphabet.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            content: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }
}
