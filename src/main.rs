//! Pixelveil CLI - hide files inside images.
//!
//! Thin host around the engine: parses arguments, prompts for the
//! passphrase, and renders the engine's progress stream.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use pixelveil::engine::{self, CancelToken, ConcealRequest, Event, RevealRequest};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc;

#[derive(Parser)]
#[command(name = "pixelveil")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Hide files inside lossless images",
    long_about = "Embeds a file into the least-significant bits of a cover image, \
                  optionally encrypting it with a passphrase first, and recovers \
                  it again from the produced image."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a file inside a cover image
    Conceal {
        /// File to conceal
        payload: PathBuf,

        /// Cover image (any lossless RGB format)
        cover: PathBuf,

        /// Output directory for the concealed image (default: current dir)
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        /// Encrypt the payload with a passphrase (prompted)
        #[arg(short, long)]
        encrypt: bool,
    },

    /// Recover a hidden file from a concealed image
    Reveal {
        /// Image produced by a previous conceal
        stego: PathBuf,

        /// Output directory for the revealed file (default: current dir)
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        /// Decrypt the payload with a passphrase (prompted); required if
        /// the file was concealed with encryption
        #[arg(short, long)]
        decrypt: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Conceal {
            payload,
            cover,
            output_dir,
            encrypt,
        } => {
            let passphrase = if encrypt {
                let passphrase = prompt_password("Enter passphrase: ");
                let confirm = prompt_password("Confirm passphrase: ");
                if passphrase != confirm {
                    bail!("passphrases do not match");
                }
                Some(passphrase)
            } else {
                None
            };

            let request = ConcealRequest {
                payload_path: payload,
                cover_path: cover,
                passphrase,
                output_dir,
            };

            let (tx, rx) = mpsc::channel();
            let handle = engine::spawn_conceal(request, tx, CancelToken::new());
            let success = render_events(rx);
            let _ = handle.join();
            if !success {
                std::process::exit(1);
            }
        }

        Commands::Reveal {
            stego,
            output_dir,
            decrypt,
        } => {
            let passphrase = decrypt.then(|| prompt_password("Enter passphrase: "));

            let request = RevealRequest {
                stego_path: stego,
                passphrase,
                output_dir,
            };

            let (tx, rx) = mpsc::channel();
            let handle = engine::spawn_reveal(request, tx, CancelToken::new());
            let success = render_events(rx);
            let _ = handle.join();
            if !success {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Drain the event stream, printing progress, and return the terminal
/// success flag.
fn render_events(rx: mpsc::Receiver<Event>) -> bool {
    let mut success = false;
    for event in rx {
        match event {
            Event::Progress { percent, message } => {
                println!("[{percent:>3}%] {message}");
            }
            Event::Finished {
                success: ok,
                message,
            } => {
                if ok {
                    println!("{message}");
                } else {
                    eprintln!("Error: {message}");
                }
                success = ok;
            }
        }
    }
    success
}

fn prompt_password(prompt: &str) -> String {
    rpassword::prompt_password(prompt).unwrap_or_else(|_| {
        eprint!("{}", prompt);
        io::stderr().flush().ok();
        let mut passphrase = String::new();
        io::stdin().lock().read_line(&mut passphrase).ok();
        passphrase.trim().to_string()
    })
}
