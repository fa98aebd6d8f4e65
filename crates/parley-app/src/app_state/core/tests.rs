//! Tests for ChatApp actions with in-memory collaborators.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use clap::Parser;
use parley_ai::{
    AiError, Completion, CompletionClient, CompletionParams, Role, SpeechClip, SpeechSynthesizer,
    TokenUsage, Transcriber, Turn,
};

use super::*;
use crate::cli::Args;

#[derive(Default)]
struct EchoCompletion {
    fail: bool,
    seen: Arc<Mutex<Vec<Vec<Turn>>>>,
}

#[async_trait]
impl CompletionClient for EchoCompletion {
    async fn complete(
        &self,
        messages: &[Turn],
        _params: &CompletionParams,
    ) -> Result<Completion, AiError> {
        self.seen.lock().unwrap().push(messages.to_vec());
        if self.fail {
            return Err(AiError::NetworkError("connection refused".into()));
        }
        let last = messages.last().map(|t| t.content.clone()).unwrap_or_default();
        Ok(Completion {
            content: format!("echo: {last}"),
            usage: TokenUsage::default(),
        })
    }
}

struct FixedTranscriber(Result<&'static str, ()>);

#[async_trait]
impl Transcriber for FixedTranscriber {
    async fn transcribe(&self, _audio: Vec<u8>, _extension: &str) -> Result<String, AiError> {
        self.0
            .map(String::from)
            .map_err(|_| AiError::ApiError("HTTP 400: bad audio".into()))
    }
}

struct FixedSpeech(bool);

#[async_trait]
impl SpeechSynthesizer for FixedSpeech {
    async fn synthesize(&self, _text: &str, _language: &str) -> Result<SpeechClip, AiError> {
        if self.0 {
            Ok(SpeechClip {
                bytes: vec![0xFF, 0xFB, 0x90],
                extension: "mp3".into(),
            })
        } else {
            Err(AiError::RateLimited)
        }
    }
}

fn app_with(completion: EchoCompletion, transcriber: FixedTranscriber, speech: FixedSpeech, out: &Path) -> ChatApp {
    let config = ParleyConfig::default();
    let args = Args::try_parse_from(["parley"]).unwrap();
    let sidebar = Sidebar::from_config(&config, &args).unwrap();
    ChatApp::new(
        config,
        sidebar,
        Clients {
            completion: Box::new(completion),
            transcriber: Box::new(transcriber),
            speech: Box::new(speech),
        },
        out.to_path_buf(),
    )
}

fn app(out: &Path) -> ChatApp {
    app_with(
        EchoCompletion::default(),
        FixedTranscriber(Ok("hello from audio")),
        FixedSpeech(true),
        out,
    )
}

#[tokio::test]
async fn send_records_both_turns() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app(dir.path());

    let outcome = app.send("Hi").await.unwrap();
    assert_eq!(outcome.reply.as_deref(), Some("echo: Hi"));
    assert_eq!(app.session.export_plain_text(), "You: Hi\n\nAI: echo: Hi");
}

#[tokio::test]
async fn persona_switch_rewrites_directive_only() {
    let dir = tempfile::tempdir().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut app = app_with(
        EchoCompletion {
            fail: false,
            seen: seen.clone(),
        },
        FixedTranscriber(Ok("")),
        FixedSpeech(true),
        dir.path(),
    );

    app.send("first").await.unwrap();
    app.switch_persona("Support Agent").unwrap();
    assert!(app
        .session
        .directive()
        .unwrap()
        .starts_with("You are a friendly customer support agent."));

    app.send("second").await.unwrap();
    let requests = seen.lock().unwrap();
    assert_eq!(requests[1][0].role, Role::System);
    assert_eq!(requests[1][0].content, app.sidebar.persona.directive);
    assert_eq!(requests[1][1], Turn::new(Role::User, "first"));
}

#[tokio::test]
async fn unknown_persona_leaves_state_alone() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app(dir.path());
    let before = app.session.directive().map(String::from);

    assert!(app.switch_persona("Pirate").is_err());
    assert_eq!(app.session.directive().map(String::from), before);
}

#[tokio::test]
async fn failed_send_keeps_user_turn_and_retry_resends() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with(
        EchoCompletion {
            fail: true,
            ..EchoCompletion::default()
        },
        FixedTranscriber(Ok("")),
        FixedSpeech(true),
        dir.path(),
    );

    let err = app.send("Hi").await.unwrap_err();
    assert!(matches!(err, ChatError::CompletionFailure(_)));
    assert_eq!(app.session.turns(), &[Turn::new(Role::User, "Hi")]);

    assert!(app.retry().await.is_err());
    assert_eq!(app.session.turns().len(), 1);
}

#[tokio::test]
async fn transcription_appends_user_turn() {
    let dir = tempfile::tempdir().unwrap();
    let audio = dir.path().join("note.WAV");
    std::fs::write(&audio, b"RIFF....WAVE").unwrap();
    let mut app = app(dir.path());

    assert!(app.transcribe_file(&audio).await.unwrap());
    assert_eq!(
        app.session.turns(),
        &[Turn::new(Role::User, "hello from audio")]
    );
}

#[tokio::test]
async fn transcription_failure_leaves_transcript_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let audio = dir.path().join("note.mp3");
    std::fs::write(&audio, b"ID3").unwrap();
    let mut app = app_with(
        EchoCompletion::default(),
        FixedTranscriber(Err(())),
        FixedSpeech(true),
        dir.path(),
    );

    let err = app.transcribe_file(&audio).await.unwrap_err();
    assert!(err.to_string().contains("transcription failed"));
    assert!(app.session.turns().is_empty());
}

#[tokio::test]
async fn unsupported_audio_format_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let audio = dir.path().join("note.flac");
    std::fs::write(&audio, b"fLaC").unwrap();
    let mut app = app(dir.path());

    let err = app.transcribe_file(&audio).await.unwrap_err();
    assert!(matches!(err, ParleyError::Input(_)));
    assert!(app.session.turns().is_empty());
}

#[tokio::test]
async fn speak_saves_clip() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let app = app(&out);

    let path = app.speak("Hello").await.unwrap();
    assert!(path.starts_with(&out));
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("tts_") && name.ends_with(".mp3"));
    assert_eq!(std::fs::read(&path).unwrap(), vec![0xFF, 0xFB, 0x90]);
}

#[tokio::test]
async fn speech_failure_does_not_touch_transcript() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with(
        EchoCompletion::default(),
        FixedTranscriber(Ok("")),
        FixedSpeech(false),
        dir.path(),
    );
    app.send("Hi").await.unwrap();

    let err = app.speak("echo: Hi").await.unwrap_err();
    assert!(err.to_string().contains("speech synthesis failed"));
    assert_eq!(app.session.turns().len(), 2);
}

#[tokio::test]
async fn new_chat_resets_to_directive_only() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app(dir.path());
    app.send("Hi").await.unwrap();

    app.new_chat();
    assert_eq!(app.session.transcript_len(), 1);
    assert_eq!(app.session.usage().call_count(), 0);
}

#[tokio::test]
async fn export_writes_to_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app(dir.path());
    app.send("Hi").await.unwrap();

    let path = app.export(None).unwrap();
    assert!(path.starts_with(dir.path()));
    assert_eq!(
        std::fs::read_to_string(path).unwrap(),
        "You: Hi\n\nAI: echo: Hi"
    );
}
