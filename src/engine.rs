//! Conceal and reveal pipelines.
//!
//! Each operation runs as one unit of work on its own thread and reports
//! through an ordered event stream: monotonically increasing progress
//! updates followed by exactly one terminal [`Event::Finished`]. The
//! pipeline functions are the engine's sole error boundary - every
//! failure is converted into the terminal event, nothing propagates into
//! the host.
//!
//! Operations share no mutable state; each owns its payload buffer,
//! image buffer, and envelope, so conceals and reveals may run in
//! parallel. Output paths derive from the input's base name, so
//! concurrent runs on distinct inputs cannot collide.

use crate::error::{Error, Result};
use crate::{bitstream, capacity, carrier, config, crypto, sniff};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

/// A progress or terminal notification from a running operation.
#[derive(Debug, Clone)]
pub enum Event {
    /// Staged progress update, percentages non-decreasing per operation.
    Progress { percent: u8, message: String },
    /// Terminal result; sent exactly once, after all progress updates.
    Finished { success: bool, message: String },
}

/// Cooperative cancellation flag, polled between pipeline stages.
///
/// Cancellation surfaces as a terminal failure. The output file is only
/// created in the final stage, so every cancel path exits with no
/// partial output on disk.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of the associated operation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(Error::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Inputs for a conceal operation.
#[derive(Debug, Clone)]
pub struct ConcealRequest {
    /// File to hide.
    pub payload_path: PathBuf,
    /// Lossless RGB cover image.
    pub cover_path: PathBuf,
    /// Optional encryption passphrase; `None` embeds cleartext.
    pub passphrase: Option<String>,
    /// Directory the stego image is written into.
    pub output_dir: PathBuf,
}

/// Inputs for a reveal operation.
#[derive(Debug, Clone)]
pub struct RevealRequest {
    /// Image produced by a previous conceal.
    pub stego_path: PathBuf,
    /// Must match the passphrase-presence used at conceal time; there is
    /// no header to detect a mismatch.
    pub passphrase: Option<String>,
    /// Directory the recovered file is written into.
    pub output_dir: PathBuf,
}

fn report(events: &Sender<Event>, percent: u8, message: &str) {
    // A disconnected subscriber must not abort the operation.
    let _ = events.send(Event::Progress {
        percent,
        message: message.to_string(),
    });
}

fn file_stem(path: &Path) -> &str {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("output")
}

fn conceal_pipeline(
    request: &ConcealRequest,
    events: &Sender<Event>,
    cancel: &CancelToken,
) -> Result<PathBuf> {
    report(events, 10, "Reading input file");
    if !request.payload_path.is_file() {
        return Err(Error::InputNotFound(request.payload_path.clone()));
    }
    let mut payload = std::fs::read(&request.payload_path)?;

    cancel.check()?;
    if let Some(passphrase) = &request.passphrase {
        report(events, 25, "Encrypting payload");
        payload = crypto::seal(&payload, passphrase)?;
    }

    cancel.check()?;
    report(events, 40, "Loading cover image");
    if !request.cover_path.is_file() {
        return Err(Error::InputNotFound(request.cover_path.clone()));
    }
    let mut image = carrier::load_rgb(&request.cover_path)?;

    let bits = bitstream::encode(&payload);
    capacity::check(bits.len(), image.width(), image.height())?;

    cancel.check()?;
    report(events, 60, "Embedding payload in image");
    carrier::embed(&mut image, &bits);

    cancel.check()?;
    report(events, 80, "Saving concealed image");
    let output_path = request.output_dir.join(format!(
        "{}{}.png",
        file_stem(&request.cover_path),
        config::CONCEAL_SUFFIX
    ));
    carrier::save_png(&image, &output_path)?;

    report(events, 100, "File concealed successfully");
    Ok(output_path)
}

fn reveal_pipeline(
    request: &RevealRequest,
    events: &Sender<Event>,
    cancel: &CancelToken,
) -> Result<PathBuf> {
    report(events, 10, "Loading concealed image");
    if !request.stego_path.is_file() {
        return Err(Error::InputNotFound(request.stego_path.clone()));
    }
    let image = carrier::load_rgb(&request.stego_path)?;

    cancel.check()?;
    report(events, 30, "Extracting hidden data");
    let bits = carrier::extract(&image)?;

    report(events, 50, "Decoding payload bytes");
    let mut payload = bitstream::decode(&bits);

    cancel.check()?;
    if let Some(passphrase) = &request.passphrase {
        report(events, 70, "Decrypting payload");
        payload = crypto::open(&payload, passphrase)?;
    }

    cancel.check()?;
    report(events, 90, "Saving revealed file");
    let extension = sniff::classify(&payload);
    let output_path = request.output_dir.join(format!(
        "{}{}.{extension}",
        file_stem(&request.stego_path),
        config::REVEAL_SUFFIX
    ));
    std::fs::write(&output_path, &payload)?;

    report(events, 100, "File revealed successfully");
    Ok(output_path)
}

fn finish(events: &Sender<Event>, result: Result<PathBuf>, verb: &str) {
    let event = match result {
        Ok(path) => Event::Finished {
            success: true,
            message: format!("File {verb} successfully: {}", path.display()),
        },
        Err(e) => Event::Finished {
            success: false,
            message: e.to_string(),
        },
    };
    let _ = events.send(event);
}

/// Run a conceal pipeline to completion on the current thread, emitting
/// progress and exactly one terminal event.
pub fn run_conceal(request: &ConcealRequest, events: &Sender<Event>, cancel: &CancelToken) {
    let result = conceal_pipeline(request, events, cancel);
    finish(events, result, "concealed");
}

/// Run a reveal pipeline to completion on the current thread, emitting
/// progress and exactly one terminal event.
pub fn run_reveal(request: &RevealRequest, events: &Sender<Event>, cancel: &CancelToken) {
    let result = reveal_pipeline(request, events, cancel);
    finish(events, result, "revealed");
}

/// Run a conceal operation on a dedicated background thread.
pub fn spawn_conceal(
    request: ConcealRequest,
    events: Sender<Event>,
    cancel: CancelToken,
) -> thread::JoinHandle<()> {
    thread::spawn(move || run_conceal(&request, &events, &cancel))
}

/// Run a reveal operation on a dedicated background thread.
pub fn spawn_reveal(
    request: RevealRequest,
    events: Sender<Event>,
    cancel: CancelToken,
) -> thread::JoinHandle<()> {
    thread::spawn(move || run_reveal(&request, &events, &cancel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_cancel_token_flags() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        assert!(token.check().is_ok());

        token.cancel();
        assert!(token.is_cancelled());
        assert!(matches!(token.check(), Err(Error::Cancelled)));
    }

    #[test]
    fn test_cancelled_clone_observes_flag() {
        let token = CancelToken::new();
        let observer = token.clone();
        token.cancel();
        assert!(observer.is_cancelled());
    }

    #[test]
    fn test_missing_payload_is_terminal_failure() {
        let (tx, rx) = mpsc::channel();
        let request = ConcealRequest {
            payload_path: PathBuf::from("/nonexistent/payload.bin"),
            cover_path: PathBuf::from("/nonexistent/cover.png"),
            passphrase: None,
            output_dir: PathBuf::from("."),
        };

        run_conceal(&request, &tx, &CancelToken::new());
        drop(tx);

        let events: Vec<Event> = rx.iter().collect();
        let last = events.last().expect("no events emitted");
        match last {
            Event::Finished { success, message } => {
                assert!(!success);
                assert!(message.contains("not found"));
            }
            _ => panic!("last event was not terminal"),
        }
        // Exactly one terminal event.
        let terminal_count = events
            .iter()
            .filter(|e| matches!(e, Event::Finished { .. }))
            .count();
        assert_eq!(terminal_count, 1);
    }

    #[test]
    fn test_pre_cancelled_conceal_fails_cleanly() {
        let (tx, rx) = mpsc::channel();
        let cancel = CancelToken::new();
        cancel.cancel();

        // Payload path must exist so the pipeline reaches a cancel check.
        let request = ConcealRequest {
            payload_path: std::env::current_exe().unwrap(),
            cover_path: PathBuf::from("/nonexistent/cover.png"),
            passphrase: None,
            output_dir: PathBuf::from("."),
        };

        run_conceal(&request, &tx, &cancel);
        drop(tx);

        let last = rx.iter().last().expect("no events emitted");
        match last {
            Event::Finished { success, message } => {
                assert!(!success);
                assert!(message.contains("cancelled"));
            }
            _ => panic!("last event was not terminal"),
        }
    }
}
