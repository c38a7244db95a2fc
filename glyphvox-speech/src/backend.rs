//! Synthesizer backends - one external TTS engine per implementation

use std::process::{Child, Command, Stdio};

use glyphvox_core::Language;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("failed to launch synthesizer: {0}")]
    Spawn(#[from] std::io::Error),
}

/// A text-to-speech engine behind the `speak(text, language)` contract.
///
/// One utterance per call, non-blocking: the synthesizer runs as its own
/// process and the call returns as soon as it is launched. Overlapping
/// utterances are allowed; the engine decides whether they queue or mix.
pub trait SpeechBackend: Send {
    fn name(&self) -> &'static str;

    fn speak(&mut self, text: &str, language: Language) -> Result<(), SpeechError>;

    /// Reap finished synthesizer processes. Called periodically by the
    /// worker loop; default is a no-op for backends without children.
    fn reap(&mut self) {}
}

/// espeak-ng (or the older espeak), the widely available Linux engine
pub struct EspeakBackend {
    program: &'static str,
    children: Vec<Child>,
}

impl EspeakBackend {
    pub fn new(program: &'static str) -> Self {
        Self {
            program,
            children: Vec::new(),
        }
    }

    /// espeak voice identifier for a locale
    fn voice(language: Language) -> &'static str {
        match language {
            Language::English => "en-gb",
            Language::German => "de",
        }
    }
}

impl SpeechBackend for EspeakBackend {
    fn name(&self) -> &'static str {
        self.program
    }

    fn speak(&mut self, text: &str, language: Language) -> Result<(), SpeechError> {
        let child = Command::new(self.program)
            .arg("-v")
            .arg(Self::voice(language))
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        self.children.push(child);
        Ok(())
    }

    fn reap(&mut self) {
        reap_children(&mut self.children);
    }
}

/// macOS `say`. Locale codes map to bundled system voices.
pub struct SayBackend {
    children: Vec<Child>,
}

impl SayBackend {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    fn voice(language: Language) -> &'static str {
        match language {
            Language::English => "Daniel",
            Language::German => "Anna",
        }
    }
}

impl SpeechBackend for SayBackend {
    fn name(&self) -> &'static str {
        "say"
    }

    fn speak(&mut self, text: &str, language: Language) -> Result<(), SpeechError> {
        let child = Command::new("say")
            .arg("-v")
            .arg(Self::voice(language))
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        self.children.push(child);
        Ok(())
    }

    fn reap(&mut self) {
        reap_children(&mut self.children);
    }
}

impl Default for SayBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// speech-dispatcher client, present on most desktop Linux installs
pub struct SpdSayBackend {
    children: Vec<Child>,
}

impl SpdSayBackend {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    fn language_arg(language: Language) -> &'static str {
        match language {
            Language::English => "en",
            Language::German => "de",
        }
    }
}

impl SpeechBackend for SpdSayBackend {
    fn name(&self) -> &'static str {
        "spd-say"
    }

    fn speak(&mut self, text: &str, language: Language) -> Result<(), SpeechError> {
        let child = Command::new("spd-say")
            .arg("-l")
            .arg(Self::language_arg(language))
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        self.children.push(child);
        Ok(())
    }

    fn reap(&mut self) {
        reap_children(&mut self.children);
    }
}

impl Default for SpdSayBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Used when no engine is installed: utterances are logged and dropped
pub struct NullBackend;

impl SpeechBackend for NullBackend {
    fn name(&self) -> &'static str {
        "null"
    }

    fn speak(&mut self, text: &str, language: Language) -> Result<(), SpeechError> {
        tracing::debug!(text, language = language.code(), "no engine, utterance dropped");
        Ok(())
    }
}

/// Drop children that have exited; keep the ones still speaking
fn reap_children(children: &mut Vec<Child>) {
    children.retain_mut(|child| matches!(child.try_wait(), Ok(None)));
}

/// Probe installed engines and pick one, most capable first.
///
/// `say` wins on macOS (bundled voices for both locales), then
/// espeak-ng/espeak, then speech-dispatcher. With nothing installed the
/// null backend keeps the app usable, just silent.
pub fn detect_backend() -> Box<dyn SpeechBackend> {
    if cfg!(target_os = "macos") && probe("say") {
        return Box::new(SayBackend::new());
    }
    if probe("espeak-ng") {
        return Box::new(EspeakBackend::new("espeak-ng"));
    }
    if probe("espeak") {
        return Box::new(EspeakBackend::new("espeak"));
    }
    if probe("spd-say") {
        return Box::new(SpdSayBackend::new());
    }
    tracing::warn!("no speech engine found, running silent");
    Box::new(NullBackend)
}

/// Check whether a program exists and is runnable
fn probe(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}
