//! Speech service for GlyphVox
//!
//! The UI sends fire-and-forget utterance requests over a channel; a
//! dedicated worker thread hands them to whichever text-to-speech engine
//! is installed. Engine failures are reported as events and otherwise
//! swallowed - the caller never blocks on or observes synthesis.

mod backend;
mod service;

pub use backend::{
    detect_backend, EspeakBackend, NullBackend, SayBackend, SpdSayBackend, SpeechBackend,
    SpeechError,
};
pub use service::{run_speech_thread, run_with_backend, SpeechCommand, SpeechEvent, SpeechService};
