//! Pixelveil - hide files inside images.
//!
//! A steganographic concealment engine that embeds an arbitrary binary
//! payload into the least-significant bits of a lossless RGB cover image,
//! with optional password-based authenticated encryption of the payload
//! before embedding.
//!
//! # Features
//!
//! - **LSB Embedding**: One payload bit per color sample, fixed row-major
//!   traversal, 16-bit end-of-payload delimiter
//! - **Optional Encryption**: PBKDF2-HMAC-SHA256 key derivation with a
//!   Fernet authenticated-encryption token
//! - **Extension Recovery**: Magic-byte sniffing picks an output extension
//!   for revealed payloads
//! - **Background Operations**: Each conceal/reveal runs on its own thread
//!   and reports staged progress over a channel
//!
//! # Architecture
//!
//! ```text
//! Conceal: payload -> [seal] -> bit frame -> capacity check -> LSB embed -> PNG
//! Reveal:  PNG -> LSB extract -> bit decode -> [open] -> sniff -> output file
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use pixelveil::engine::{self, CancelToken, ConcealRequest, Event};
//! use std::path::PathBuf;
//! use std::sync::mpsc;
//!
//! let (tx, rx) = mpsc::channel();
//! let request = ConcealRequest {
//!     payload_path: PathBuf::from("secret.zip"),
//!     cover_path: PathBuf::from("photo.png"),
//!     passphrase: Some("hunter2".to_string()),
//!     output_dir: PathBuf::from("."),
//! };
//! let handle = engine::spawn_conceal(request, tx, CancelToken::new());
//!
//! for event in rx {
//!     match event {
//!         Event::Progress { percent, message } => println!("{percent}% {message}"),
//!         Event::Finished { success, message } => println!("{success}: {message}"),
//!     }
//! }
//! handle.join().unwrap();
//! ```

pub mod bitstream;
pub mod capacity;
pub mod carrier;
pub mod config;
pub mod crypto;
pub mod engine;
pub mod error;
pub mod sniff;

pub use engine::{CancelToken, ConcealRequest, Event, RevealRequest};
pub use error::{Error, Result};
