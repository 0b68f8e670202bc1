//! Terminal boundary: where zip codes come from and where warnings go.

use std::io::{self, BufRead, Write};

/// The prompt shown before each zip code is read.
pub const PROMPT: &str = "Zip Code> ";

/// A source of raw zip code lines.
pub trait PostalInput {
    /// Next line typed by the user, or `None` once input is exhausted.
    fn read_postal_code(&mut self) -> io::Result<Option<String>>;
}

/// Destination for user-facing warnings.
pub trait WarningSink {
    fn warn(&mut self, message: &str);
}

/// Collects warnings in order.
impl WarningSink for Vec<String> {
    fn warn(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Line-oriented input that writes [`PROMPT`] before every read. Used when
/// stdin is not a terminal, and in tests with in-memory buffers.
#[derive(Debug)]
pub struct LineInput<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl<R: BufRead, W: Write> PostalInput for LineInput<R, W> {
    fn read_postal_code(&mut self) -> io::Result<Option<String>> {
        self.prompt_out.write_all(PROMPT.as_bytes())?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
