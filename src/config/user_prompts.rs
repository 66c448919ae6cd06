//! User interaction and prompts
//!
//! Line-oriented stdin prompts shared by the config setup and the
//! interactive menu. A single buffered reader is kept for the whole session
//! so piped input is not lost between prompts.

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin};

pub struct Prompter {
    reader: BufReader<Stdin>,
}

impl Default for Prompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter {
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(io::stdin()),
        }
    }

    /// Prints `message` without a newline and returns the trimmed line typed by the user.
    ///
    /// Returns `Ok(None)` when stdin is closed.
    pub async fn line(&mut self, message: &str) -> Result<Option<String>, AppError> {
        let mut stdout = io::stdout();
        stdout.write_all(message.as_bytes()).await?;
        stdout.flush().await?;

        let mut input = String::new();
        if self.reader.read_line(&mut input).await? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    /// Prompts the user for The Odds API key.
    ///
    /// An empty answer (or closed stdin) yields `None`.
    pub async fn api_key(&mut self) -> Result<Option<String>, AppError> {
        let key = self
            .line("Please enter your API key for The Odds API: ")
            .await?;
        Ok(key.filter(|k| !k.is_empty()))
    }
}
