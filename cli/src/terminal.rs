//! Line-oriented terminal I/O that doubles as the controller's `Prompt`.

use std::io::{self, BufRead, Write};

use medicine_core::Prompt;

pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    pub fn println(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Print `label` and read one line without its line ending.
    /// `None` means end of input.
    pub fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        self.print(label)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R: BufRead, W: Write> Prompt for Terminal<R, W> {
    fn alert(&mut self, message: &str) {
        if let Err(err) = self.println(&format!("** {message}")) {
            tracing::warn!(error = %err, "failed to show alert");
        }
    }

    /// Anything but `y`/`yes` (or end of input) declines.
    fn confirm(&mut self, message: &str) -> bool {
        match self.ask(&format!("{message} [y/N] ")) {
            Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read confirmation");
                false
            }
        }
    }
}
