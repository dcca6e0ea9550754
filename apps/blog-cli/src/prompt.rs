//! Line-oriented prompting on an async reader.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::error::AppResult;

/// What the user answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Value(String),
    Back,
    Cancel,
}

pub struct Prompter<R, W> {
    lines: Lines<R>,
    out: W,
}

impl<R, W> Prompter<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(input: R, out: W) -> Self {
        Self {
            lines: input.lines(),
            out,
        }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Print `question` and read one line. End of input counts as cancel.
    pub async fn ask(&mut self, question: &str) -> AppResult<Answer> {
        write!(self.out, "{question}: ")?;
        self.out.flush()?;

        let Some(line) = self.lines.next_line().await? else {
            writeln!(self.out)?;
            return Ok(Answer::Cancel);
        };

        let answer = match line.trim() {
            ":back" => Answer::Back,
            ":cancel" => Answer::Cancel,
            _ => Answer::Value(line.trim_end_matches('\r').to_string()),
        };
        Ok(answer)
    }
}
