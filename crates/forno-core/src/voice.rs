//! Audio capture session buffering.
//!
//! Actual microphone acquisition is delegated to the caller; this module
//! only models the session lifecycle the order flow depends on: one
//! append-only buffer per recording, cleared when a new recording
//! starts, consumed exactly once when it stops.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::debug;

use crate::error::{OrderError, Result};

/// One start-to-stop audio capture session.
#[derive(Debug, Default)]
pub struct RecordingSession {
    chunks: Vec<Vec<u8>>,
    recording: bool,
}

impl RecordingSession {
    /// Creates an idle session with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a recording is currently in progress.
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Begin a new recording, clearing any leftover buffer.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Audio`] when a recording is already in
    /// progress; the previous session must be stopped first.
    pub fn start(&mut self) -> Result<()> {
        if self.recording {
            return Err(OrderError::audio("recording already in progress"));
        }
        self.chunks.clear();
        self.recording = true;
        Ok(())
    }

    /// Append a chunk of captured audio to the session buffer.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Audio`] when no recording is in progress.
    pub fn push_chunk(&mut self, chunk: &[u8]) -> Result<()> {
        if !self.recording {
            return Err(OrderError::audio("no recording in progress"));
        }
        if !chunk.is_empty() {
            self.chunks.push(chunk.to_vec());
        }
        Ok(())
    }

    /// Stop the recording and consume the buffer, returning the
    /// concatenated audio as a base64 payload ready for the interpreter.
    ///
    /// The buffer is consumed exactly once; a second stop without a new
    /// start is a usage error.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Audio`] when no recording is in progress.
    pub fn stop(&mut self) -> Result<String> {
        if !self.recording {
            return Err(OrderError::audio("no recording in progress"));
        }
        self.recording = false;

        let audio: Vec<u8> = self.chunks.drain(..).flatten().collect();
        debug!("Recording stopped with {} bytes captured", audio.len());
        Ok(STANDARD.encode(audio))
    }
}
