//! CLI Solitaire example.
//!
//! Set `RUST_LOG=solitaire=trace` to watch the deck advance.

use std::io::{self, Write};

use solitaire::Cipher;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let encrypt = match prompt_line("[E]ncrypt or [D]ecrypt? [E/D]: ").to_lowercase().as_str() {
        "e" | "encrypt" => true,
        "d" | "decrypt" => false,
        _ => return,
    };

    let passphrase = prompt_line("Passphrase (blank for the unkeyed deck): ");
    let cipher = if passphrase.is_empty() {
        Cipher::unkeyed()
    } else {
        Cipher::from_passphrase(&passphrase)
    };

    let input = prompt_line("Text: ");
    if input.is_empty() {
        return;
    }

    let output = if encrypt {
        Ok(cipher.encrypt(&input))
    } else {
        cipher.decrypt(&input)
    };

    match output {
        Ok(text) => println!("\nOutput:\n{}\n", cipher.group(&text)),
        Err(err) => println!("\nError: {err}\n"),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_owned()
}
