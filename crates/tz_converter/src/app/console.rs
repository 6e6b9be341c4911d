use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::core::error::{ConverterError, ConverterResult};

/// Line-oriented terminal: one line in per read, one line out per write
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Read the next line without its terminator
    ///
    /// # Returns
    /// * `Ok(String)` - The line as typed, invalid UTF-8 replaced with U+FFFD
    /// * `Err(ConverterError::InputClosed)` - The input reached end-of-file
    pub fn read_line(&mut self) -> ConverterResult<String> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(ConverterError::InputClosed);
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn say(&mut self, text: impl Display) -> ConverterResult<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Print `question` and read the answer
    pub fn prompt(&mut self, question: &str) -> ConverterResult<String> {
        self.say(question)?;
        self.read_line()
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}
