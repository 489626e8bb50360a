use crate::error::SessionError;
use std::collections::VecDeque;
use std::fmt;
use std::io::{BufRead, Write};

/// Prompt-and-read over any line reader and writer.
///
/// Input is consumed as whitespace-separated tokens, so several answers may
/// arrive on one line.
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    pub fn write_line(&mut self, line: &str) -> Result<(), SessionError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Writes raw text (no newline added) and flushes.
    pub fn write_str(&mut self, text: &str) -> Result<(), SessionError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    fn next_token(&mut self) -> Result<String, SessionError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            // Raw bytes: invalid UTF-8 becomes a token that fails to parse.
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Err(SessionError::InputClosed);
            }
            let line = String::from_utf8_lossy(&line);
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Shows `prompt` and reads one token. `None` means the token was not an
    /// integer.
    pub fn read_int(&mut self, prompt: &str) -> Result<Option<i64>, SessionError> {
        self.write_str(prompt)?;
        let token = self.next_token()?;
        match token.parse::<i64>() {
            Ok(n) => Ok(Some(n)),
            Err(_) => {
                log::warn!("ignoring non-numeric input {:?}", token);
                Ok(None)
            }
        }
    }

    /// Re-asks until `validate` accepts an integer, printing `invalid` after
    /// every rejected answer.
    pub fn read_valid<T, E: fmt::Display>(
        &mut self,
        prompt: &str,
        invalid: &str,
        validate: impl Fn(i64) -> Result<T, E>,
    ) -> Result<T, SessionError> {
        loop {
            if let Some(n) = self.read_int(prompt)? {
                match validate(n) {
                    Ok(value) => return Ok(value),
                    Err(e) => log::warn!("rejected {}: {}", n, e),
                }
            }
            self.write_line(invalid)?;
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoops_core::RackNumber;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn text(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_tokens_share_a_line() {
        let mut c = console("3 7\n\n  12\n");
        assert_eq!(c.read_int("> ").unwrap(), Some(3));
        assert_eq!(c.read_int("> ").unwrap(), Some(7));
        assert_eq!(c.read_int("> ").unwrap(), Some(12));
        assert_eq!(text(c), "> > > ");
    }

    #[test]
    fn test_non_numeric_token() {
        let mut c = console("abc -4\n");
        assert_eq!(c.read_int("? ").unwrap(), None);
        assert_eq!(c.read_int("? ").unwrap(), Some(-4));
    }

    #[test]
    fn test_read_valid_reprompts() {
        let mut c = console("0 nine 9 4\n");
        let rack = c.read_valid("n: ", "bad", RackNumber::new).unwrap();
        assert_eq!(rack.get(), 4);
        assert_eq!(text(c), "n: bad\nn: bad\nn: bad\nn: ");
    }

    #[test]
    fn test_invalid_utf8_token_is_reprompted() {
        let input = b"\xff\xfe 2\n".to_vec();
        let mut c = Console::new(Cursor::new(input), Vec::new());
        let rack = c.read_valid("n: ", "bad", RackNumber::new).unwrap();
        assert_eq!(rack.get(), 2);
        assert_eq!(text(c), "n: bad\nn: ");
    }

    #[test]
    fn test_end_of_input() {
        let mut c = console("7\n");
        let err = c.read_valid("n: ", "bad", RackNumber::new).unwrap_err();
        assert!(matches!(err, SessionError::InputClosed));
    }
}
