//! Speech service - channel handle and worker loop

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, Sender};
use glyphvox_core::Language;

use crate::backend::{detect_backend, SpeechBackend};

/// Commands sent to the speech worker
#[derive(Debug, Clone)]
pub enum SpeechCommand {
    /// Vocalize `text` in `language`. Text arrives already lowercased.
    Speak { text: String, language: Language },
    Shutdown,
}

/// Events sent from the speech worker
#[derive(Debug, Clone)]
pub enum SpeechEvent {
    /// An utterance was handed to the engine
    Spoke { text: String, language: Language },
    /// The engine could not be invoked; the utterance was dropped
    Error(String),
}

/// Handle held by the UI thread. Sending never blocks; if the channel is
/// saturated the utterance is dropped, which is acceptable for a
/// fire-and-forget boundary.
pub struct SpeechService {
    command_tx: Sender<SpeechCommand>,
    pub event_rx: Receiver<SpeechEvent>,
}

impl SpeechService {
    /// Create channels for worker communication.
    /// 64 slots is generous headroom for a single keyboard's event rate.
    pub fn create_channels() -> (
        Sender<SpeechCommand>,
        Receiver<SpeechCommand>,
        Sender<SpeechEvent>,
        Receiver<SpeechEvent>,
    ) {
        let (cmd_tx, cmd_rx) = bounded(64);
        let (evt_tx, evt_rx) = bounded(64);
        (cmd_tx, cmd_rx, evt_tx, evt_rx)
    }

    pub fn new(command_tx: Sender<SpeechCommand>, event_rx: Receiver<SpeechEvent>) -> Self {
        Self {
            command_tx,
            event_rx,
        }
    }

    /// Request an utterance, fire-and-forget
    pub fn speak(&self, text: impl Into<String>, language: Language) {
        let _ = self.command_tx.try_send(SpeechCommand::Speak {
            text: text.into(),
            language,
        });
    }

    /// Ask the worker to exit
    pub fn shutdown(&self) {
        let _ = self.command_tx.try_send(SpeechCommand::Shutdown);
    }
}

/// Worker entry point: probe for an engine, then serve requests until
/// shutdown.
pub fn run_speech_thread(
    cmd_rx: Receiver<SpeechCommand>,
    evt_tx: Sender<SpeechEvent>,
    shutdown: Arc<AtomicBool>,
) {
    let backend = detect_backend();
    tracing::info!(engine = backend.name(), "speech worker ready");
    run_with_backend(backend, cmd_rx, evt_tx, shutdown);
}

/// Worker loop with an injected backend (tests pass the null backend)
pub fn run_with_backend(
    mut backend: Box<dyn SpeechBackend>,
    cmd_rx: Receiver<SpeechCommand>,
    evt_tx: Sender<SpeechEvent>,
    shutdown: Arc<AtomicBool>,
) {
    while !shutdown.load(Ordering::Relaxed) {
        match cmd_rx.recv_timeout(Duration::from_millis(50)) {
            Ok(SpeechCommand::Shutdown) => break,
            Ok(SpeechCommand::Speak { text, language }) => {
                match backend.speak(&text, language) {
                    Ok(()) => {
                        let _ = evt_tx.try_send(SpeechEvent::Spoke { text, language });
                    }
                    Err(e) => {
                        // Engine failure never propagates past this boundary
                        tracing::warn!(error = %e, "utterance failed");
                        let _ = evt_tx.try_send(SpeechEvent::Error(e.to_string()));
                    }
                }
            }
            Err(_) => {}
        }

        backend.reap();
    }
}
