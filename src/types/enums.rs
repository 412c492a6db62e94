//! Closed string enumerations of the recognize API.
//!
//! Each variant serializes to the exact literal the service documents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Returned by `FromStr` when a literal is not one of the documented values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} literal: {value:?}")]
pub struct ParseLiteralError {
    pub kind: &'static str,
    pub value: String,
}

/// Encoding of the audio sent in [`RecognitionAudio`](super::RecognitionAudio).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioEncoding {
    /// Not specified.
    #[serde(rename = "ENCODING_UNSPECIFIED")]
    EncodingUnspecified,
    /// Uncompressed 16-bit signed little-endian samples (Linear PCM).
    #[serde(rename = "LINEAR16", alias = "LINEAR_16")]
    Linear16,
    /// Free Lossless Audio Codec, 16-bit and 24-bit samples.
    #[serde(rename = "FLAC")]
    Flac,
    /// 8-bit samples companding 14-bit audio using G.711 PCMU/mu-law.
    #[serde(rename = "MULAW")]
    Mulaw,
    /// Adaptive Multi-Rate Narrowband. `sampleRateHertz` must be 8000.
    #[serde(rename = "AMR")]
    Amr,
    /// Adaptive Multi-Rate Wideband. `sampleRateHertz` must be 16000.
    #[serde(rename = "AMR_WB")]
    AmrWb,
    /// Opus frames in an Ogg container. Sample rate one of 8000, 12000, 16000, 24000 or 48000.
    #[serde(rename = "OGG_OPUS")]
    OggOpus,
    /// Speex wideband with a length header byte per block (RFC 5574 framing). 16000 Hz only.
    #[serde(rename = "SPEEX_WITH_HEADER_BYTE")]
    SpeexWithHeaderByte,
}

impl AudioEncoding {
    pub const ALL: [AudioEncoding; 8] = [
        Self::EncodingUnspecified,
        Self::Linear16,
        Self::Flac,
        Self::Mulaw,
        Self::Amr,
        Self::AmrWb,
        Self::OggOpus,
        Self::SpeexWithHeaderByte,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EncodingUnspecified => "ENCODING_UNSPECIFIED",
            Self::Linear16 => "LINEAR16",
            Self::Flac => "FLAC",
            Self::Mulaw => "MULAW",
            Self::Amr => "AMR",
            Self::AmrWb => "AMR_WB",
            Self::OggOpus => "OGG_OPUS",
            Self::SpeexWithHeaderByte => "SPEEX_WITH_HEADER_BYTE",
        }
    }
}

impl fmt::Display for AudioEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AudioEncoding {
    type Err = ParseLiteralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "LINEAR_16" {
            return Ok(Self::Linear16);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| ParseLiteralError {
                kind: "audio encoding",
                value: s.to_string(),
            })
    }
}

/// Recognition model selection. The service auto-selects when none is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecognitionModel {
    /// Short queries such as voice commands or voice search.
    CommandAndSearch,
    /// Audio from a phone call, typically recorded at 8 kHz.
    PhoneCall,
    /// Audio from video or with multiple speakers, ideally 16 kHz or more. Premium.
    Video,
    /// Anything else, e.g. long-form audio.
    Default,
}

impl RecognitionModel {
    pub const ALL: [RecognitionModel; 4] = [
        Self::CommandAndSearch,
        Self::PhoneCall,
        Self::Video,
        Self::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CommandAndSearch => "command_and_search",
            Self::PhoneCall => "phone_call",
            Self::Video => "video",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for RecognitionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecognitionModel {
    type Err = ParseLiteralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ParseLiteralError {
                kind: "recognition model",
                value: s.to_string(),
            })
    }
}
