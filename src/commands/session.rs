//! Line-oriented session loop.

use super::handlers::{Assistant, Reply};
use super::messages::{GOODBYE, PROMPT, WELCOME};
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};
use tracing::info;

impl Assistant {
    /// Read commands from `input` until `close`/`exit` or end of input.
    ///
    /// `today` is asked once per command so a session left open over
    /// midnight sees the new date. Bytes that are not UTF-8 are replaced
    /// rather than failing the read, so a garbled line is just another
    /// bad command.
    pub fn run<R, W, F>(&mut self, mut input: R, mut output: W, today: F) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        F: Fn() -> NaiveDate,
    {
        writeln!(output, "{}", WELCOME)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                info!("Input closed, ending session");
                writeln!(output)?;
                writeln!(output, "{}", GOODBYE)?;
                return Ok(());
            }

            let line = String::from_utf8_lossy(&buf);
            match self.handle(&line, today()) {
                Reply::Message(message) => writeln!(output, "{}", message)?,
                Reply::Silent => {}
                Reply::Exit(message) => {
                    writeln!(output, "{}", message)?;
                    info!(contacts = self.book().len(), "Session closed");
                    return Ok(());
                }
            }
        }
    }
}
