//! Response side of `speech:recognize`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizeResponse {
    /// One entry per sequential portion of the audio. Absent when nothing was recognized.
    #[serde(default)]
    pub results: Vec<SpeechRecognitionResults>,
    /// Billed audio duration as sent by the service, e.g. "3.5s". Not parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_billed_time: Option<String>,
}

impl RecognizeResponse {
    pub fn is_empty(&self) -> bool {
        self.results.iter().all(|r| r.alternatives.is_empty())
    }

    /// Top alternative of every result, joined with a single space in result order.
    pub fn transcript(&self) -> String {
        self.results
            .iter()
            .filter_map(SpeechRecognitionResults::top_alternative)
            .map(|alt| alt.transcript.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechRecognitionResults {
    /// Most probable first.
    #[serde(default)]
    pub alternatives: Vec<SpeechRecognitionAlternative>,
    /// 1..=N with per-channel recognition, otherwise the single-channel default.
    #[serde(default)]
    pub channel_tag: i32,
}

impl SpeechRecognitionResults {
    pub fn top_alternative(&self) -> Option<&SpeechRecognitionAlternative> {
        self.alternatives.first()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechRecognitionAlternative {
    #[serde(default)]
    pub transcript: String,
    /// 0.0..=1.0. Only populated for the top alternative; 0.0 means "not set".
    #[serde(default)]
    pub confidence: f64,
}

impl SpeechRecognitionAlternative {
    pub fn confidence_if_set(&self) -> Option<f64> {
        (self.confidence != 0.0).then_some(self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{"results":[{"alternatives":[{"transcript":"hello world","confidence":0.98}],"channelTag":1}],"totalBilledTime":"2.1s"}"#;

    #[test]
    fn parses_documented_body() {
        let resp: RecognizeResponse = serde_json::from_str(BODY).unwrap();
        assert_eq!(resp.results.len(), 1);
        let result = &resp.results[0];
        assert_eq!(result.channel_tag, 1);
        assert_eq!(result.alternatives.len(), 1);
        assert_eq!(result.alternatives[0].transcript, "hello world");
        assert_eq!(result.alternatives[0].confidence, 0.98);
        assert_eq!(resp.total_billed_time.as_deref(), Some("2.1s"));
        assert_eq!(resp.transcript(), "hello world");
    }

    #[test]
    fn empty_object_is_an_empty_response() {
        let resp: RecognizeResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.results.is_empty());
        assert!(resp.total_billed_time.is_none());
        assert!(resp.is_empty());
        assert_eq!(resp.transcript(), "");
    }

    #[test]
    fn missing_fields_fall_back_to_sentinels() {
        let resp: RecognizeResponse =
            serde_json::from_str(r#"{"results":[{"alternatives":[{"transcript":"ja"},{}]}]}"#)
                .unwrap();
        let result = &resp.results[0];
        assert_eq!(result.channel_tag, 0);
        assert_eq!(result.alternatives[0].confidence_if_set(), None);
        assert_eq!(result.alternatives[1].transcript, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let resp: RecognizeResponse = serde_json::from_str(
            r#"{"results":[{"alternatives":[{"transcript":"a","confidence":0.5,"words":[]}],"languageCode":"en-us","resultEndTime":"1s"}],"requestId":"42"}"#,
        )
        .unwrap();
        assert_eq!(resp.results[0].alternatives[0].confidence_if_set(), Some(0.5));
    }

    #[test]
    fn transcript_joins_top_alternatives_in_order() {
        let resp: RecognizeResponse = serde_json::from_str(
            r#"{"results":[
                {"alternatives":[{"transcript":"next train","confidence":0.9},{"transcript":"next rain"}]},
                {"alternatives":[]},
                {"alternatives":[{"transcript":" to Salzburg","confidence":0.8}]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(resp.transcript(), "next train to Salzburg");
        assert!(!resp.is_empty());
        assert!(resp.results[1].top_alternative().is_none());
    }
}
