//! speech-recognize — send one audio file to `speech:recognize` and print the result.
//!
//! Usage:
//!   speech-recognize <audio-file> --language <tag> [options]
//!
//! Endpoint and credentials come from SPEECH_API_URL, SPEECH_API_KEY and the
//! optional SPEECH_GATEWAY_HEADER_NAME / SPEECH_GATEWAY_HEADER_VALUE pair.

use cloud_speech_rest::types::{
    AudioEncoding, RecognitionAudio, RecognitionConfig, RecognitionModel, RecognizeRequest,
    SpeechContext,
};
use cloud_speech_rest::{ClientConfig, Error, RecognizeClient};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Args {
    audio: PathBuf,
    config: RecognitionConfig,
}

fn print_usage() {
    println!(
        r#"speech-recognize — one-shot speech recognition

USAGE:
    speech-recognize <AUDIO-FILE> --language <TAG> [OPTIONS]

OPTIONS:
    --language <TAG>            BCP-47 language code (required), e.g. en-US
    --encoding <ENC>            LINEAR16, FLAC, MULAW, AMR, AMR_WB, OGG_OPUS, SPEEX_WITH_HEADER_BYTE
    --sample-rate <HZ>          Sample rate in Hertz (8000-48000)
    --channels <N>              Audio channel count
    --separate-channels         Recognize each channel separately
    --model <NAME>              command_and_search, phone_call, video, default
    --enhanced                  Use the enhanced variant of the model if available
    --max-alternatives <N>      Maximum alternatives per result (0-30)
    --profanity-filter          Mask profanities
    --punctuation               Add automatic punctuation
    --word-offsets              Request word time offsets
    --phrase <TEXT>             Phrase hint, may be repeated
    -h, --help                  Show this help message

ENVIRONMENT:
    SPEECH_API_URL              Endpoint (default: public v1 speech:recognize)
    SPEECH_API_KEY              API key sent as the `key` query parameter
    SPEECH_GATEWAY_HEADER_NAME  Optional static gateway header name
    SPEECH_GATEWAY_HEADER_VALUE Optional static gateway header value
    RUST_LOG                    Log filter, e.g. cloud_speech_rest=debug"#
    );
}

fn value_of<'a>(flag: &str, it: &mut impl Iterator<Item = &'a String>) -> Result<&'a String, String> {
    it.next().ok_or_else(|| format!("{flag} requires a value"))
}

fn parse_number(flag: &str, raw: &str) -> Result<u32, String> {
    raw.parse::<u32>()
        .map_err(|e| format!("{flag}: invalid number {raw:?}: {e}"))
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut audio: Option<PathBuf> = None;
    let mut language: Option<String> = None;
    let mut encoding = None;
    let mut sample_rate = None;
    let mut channels = None;
    let mut separate_channels = false;
    let mut model = None;
    let mut enhanced = false;
    let mut max_alternatives = None;
    let mut profanity_filter = false;
    let mut punctuation = false;
    let mut word_offsets = false;
    let mut phrases: Vec<String> = Vec::new();

    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--language" => language = Some(value_of(arg, &mut it)?.clone()),
            "--encoding" => {
                let raw = value_of(arg, &mut it)?;
                encoding = Some(raw.parse::<AudioEncoding>().map_err(|e| e.to_string())?);
            }
            "--sample-rate" => sample_rate = Some(parse_number(arg, value_of(arg, &mut it)?)?),
            "--channels" => channels = Some(parse_number(arg, value_of(arg, &mut it)?)?),
            "--separate-channels" => separate_channels = true,
            "--model" => {
                let raw = value_of(arg, &mut it)?;
                model = Some(raw.parse::<RecognitionModel>().map_err(|e| e.to_string())?);
            }
            "--enhanced" => enhanced = true,
            "--max-alternatives" => {
                max_alternatives = Some(parse_number(arg, value_of(arg, &mut it)?)?)
            }
            "--profanity-filter" => profanity_filter = true,
            "--punctuation" => punctuation = true,
            "--word-offsets" => word_offsets = true,
            "--phrase" => phrases.push(value_of(arg, &mut it)?.clone()),
            other if other.starts_with("--") => return Err(format!("Unknown option: {other}")),
            other => {
                if audio.is_some() {
                    return Err(format!("Unexpected argument: {other}"));
                }
                audio = Some(PathBuf::from(other));
            }
        }
    }

    let audio = audio.ok_or("Missing <AUDIO-FILE>")?;
    let language = language.ok_or("Missing --language")?;

    // Flags only go on the wire when given, so the service keeps its defaults otherwise.
    let mut config = RecognitionConfig::new(language);
    if let Some(enc) = encoding {
        config = config.with_encoding(enc);
    }
    if let Some(hz) = sample_rate {
        config = config.with_sample_rate_hertz(hz);
    }
    if let Some(n) = channels {
        config = config.with_audio_channel_count(n);
    }
    if separate_channels {
        config = config.with_separate_recognition_per_channel(true);
    }
    if let Some(m) = model {
        config = config.with_model(m);
    }
    if enhanced {
        config = config.with_use_enhanced(true);
    }
    if let Some(n) = max_alternatives {
        config = config.with_max_alternatives(n);
    }
    if profanity_filter {
        config = config.with_profanity_filter(true);
    }
    if punctuation {
        config = config.with_automatic_punctuation(true);
    }
    if word_offsets {
        config = config.with_word_time_offsets(true);
    }
    if !phrases.is_empty() {
        config = config.with_speech_context(SpeechContext::new(phrases));
    }

    Ok(Args { audio, config })
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = tokio::fs::read(&args.audio).await?;
    let request = RecognizeRequest::new(args.config, RecognitionAudio::from_bytes(&bytes));

    let client = RecognizeClient::new(ClientConfig::from_env()?)?;
    let response = client.recognize(&request).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    if argv.is_empty() || argv.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return if argv.is_empty() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        };
    }

    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<Error>() {
                Some(Error::Api { status, body }) => {
                    eprintln!("Service returned HTTP {status}:");
                    eprintln!("{body}");
                }
                _ => eprintln!("Error: {e}"),
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_flags_into_config() {
        let args = parse_args(&argv(&[
            "call.flac",
            "--language",
            "de-AT",
            "--encoding",
            "FLAC",
            "--sample-rate",
            "16000",
            "--model",
            "phone_call",
            "--phrase",
            "Westbahn",
            "--phrase",
            "$MONTH",
            "--punctuation",
        ]))
        .unwrap();
        assert_eq!(args.audio, PathBuf::from("call.flac"));
        let expected = RecognitionConfig::new("de-AT")
            .with_encoding(AudioEncoding::Flac)
            .with_sample_rate_hertz(16000)
            .with_model(RecognitionModel::PhoneCall)
            .with_automatic_punctuation(true)
            .with_speech_context(SpeechContext::new(["Westbahn", "$MONTH"]));
        assert_eq!(args.config, expected);
    }

    #[test]
    fn omitted_flags_stay_unset() {
        let args = parse_args(&argv(&["a.wav", "--language", "en-US"])).unwrap();
        assert_eq!(args.config, RecognitionConfig::new("en-US"));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_args(&argv(&["a.wav"])).is_err());
        assert!(parse_args(&argv(&["--language", "en-US"])).is_err());
        assert!(parse_args(&argv(&["a.wav", "--language"])).is_err());
        assert!(parse_args(&argv(&["a.wav", "--language", "en-US", "--encoding", "MP3"])).is_err());
        assert!(parse_args(&argv(&["a.wav", "--language", "en-US", "--sample-rate", "fast"])).is_err());
        assert!(parse_args(&argv(&["a.wav", "b.wav", "--language", "en-US"])).is_err());
        assert!(parse_args(&argv(&["a.wav", "--language", "en-US", "--verbose"])).is_err());
    }
}
