//! Line-based console used for prompts, responses and feedback.

use std::io::{self, BufRead, Write};

/// A source of typed lines and a sink for displayed lines.
pub trait Console {
    /// Show `prompt` and read one line of input without its line terminator.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Display one line of output.
    fn write_line(&mut self, text: &str) -> io::Result<()>;
}

/// [`Console`] over any buffered reader and writer.
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the console, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        strip_terminator(&mut line);
        Ok(Some(line))
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)
    }
}

fn strip_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
