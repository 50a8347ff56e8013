//! Byte-at-a-time line assembly with echo.

use core::fmt::Write;

use crate::error::{CommandError, Result};

/// Non-blocking source of operator input.
pub trait CharSource {
    /// Next byte, or `None` if nothing is waiting.
    fn read_byte(&mut self) -> Option<u8>;
}

impl<F> CharSource for F
where
    F: FnMut() -> Option<u8>,
{
    fn read_byte(&mut self) -> Option<u8> {
        self()
    }
}

const BACKSPACE: u8 = 0x08;
const DELETE: u8 = 0x7f;

/// Assembles operator input into lines of at most `N - 1` bytes.
///
/// Only printable ASCII is kept, so a completed line is always valid UTF-8.
/// Echo goes to the given sink; echo failures are ignored.
#[derive(Debug, Clone, Default)]
pub struct LineEditor<const N: usize> {
    buffer: heapless::String<N>,
    /// Printable bytes typed past the end of the buffer and not yet erased.
    dropped: usize,
}

impl<const N: usize> LineEditor<N> {
    /// Empty editor.
    pub const fn new() -> Self {
        Self {
            buffer: heapless::String::new(),
            dropped: 0,
        }
    }

    /// Text typed so far.
    #[inline]
    pub fn pending(&self) -> &str {
        self.buffer.as_str()
    }

    /// Feed one byte.
    ///
    /// Returns `Some` when `\n` completes a line: the line text, or
    /// `LineTooLong` if bytes are still dropped. The editor is then empty.
    ///
    /// Backspace erases dropped bytes first, so erasing back under the
    /// limit yields a valid line.
    pub fn feed<W: Write>(&mut self, byte: u8, echo: &mut W) -> Option<Result<heapless::String<N>>> {
        match byte {
            b'\n' => {
                let _ = echo.write_char('\n');
                Some(self.finish())
            }
            BACKSPACE | DELETE => {
                if self.dropped > 0 {
                    // Never echoed
                    self.dropped -= 1;
                } else if self.buffer.pop().is_some() {
                    let _ = echo.write_str("\x08 \x08");
                }
                None
            }
            0x20..=0x7e => {
                if self.dropped > 0 || self.buffer.len() + 1 >= N {
                    self.dropped += 1;
                } else {
                    // Capacity checked above
                    let _ = self.buffer.push(byte as char);
                    let _ = echo.write_char(byte as char);
                }
                None
            }
            _ => None,
        }
    }

    /// Read at most one byte from `source` and feed it.
    pub fn poll<S: CharSource, W: Write>(
        &mut self,
        source: &mut S,
        echo: &mut W,
    ) -> Option<Result<heapless::String<N>>> {
        let byte = source.read_byte()?;
        self.feed(byte, echo)
    }

    fn finish(&mut self) -> Result<heapless::String<N>> {
        let line = core::mem::take(&mut self.buffer);
        let dropped = core::mem::take(&mut self.dropped);
        if dropped > 0 {
            return Err(CommandError::LineTooLong {
                length: line.len() + dropped,
                max: N,
            }
            .into());
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::string::String;

    fn feed_all<const N: usize>(
        editor: &mut LineEditor<N>,
        input: &[u8],
        echo: &mut String,
    ) -> Option<Result<heapless::String<N>>> {
        let mut result = None;
        for &byte in input {
            if let Some(line) = editor.feed(byte, echo) {
                result = Some(line);
            }
        }
        result
    }

    #[test]
    fn test_simple_line() {
        let mut editor = LineEditor::<50>::new();
        let mut echo = String::new();

        let line = feed_all(&mut editor, b"help\n", &mut echo).unwrap().unwrap();
        assert_eq!(line.as_str(), "help");
        assert_eq!(echo, "help\n");
        assert_eq!(editor.pending(), "");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut editor = LineEditor::<50>::new();
        let mut echo = String::new();

        let line = feed_all(&mut editor, b"hx\x08elq\x7fp\n", &mut echo)
            .unwrap()
            .unwrap();
        assert_eq!(line.as_str(), "help");
        assert_eq!(echo, "hx\x08 \x08elq\x08 \x08p\n");
    }

    #[test]
    fn test_backspace_on_empty_line_is_silent() {
        let mut editor = LineEditor::<50>::new();
        let mut echo = String::new();
        assert!(feed_all(&mut editor, b"\x08\x7f", &mut echo).is_none());
        assert_eq!(echo, "");
    }

    #[test]
    fn test_control_characters_ignored() {
        let mut editor = LineEditor::<50>::new();
        let mut echo = String::new();

        let line = feed_all(&mut editor, b"stop\r\x1b_stepper\r\n", &mut echo)
            .unwrap()
            .unwrap();
        assert_eq!(line.as_str(), "stop_stepper");
    }

    #[test]
    fn test_overflow_reports_too_long() {
        let mut editor = LineEditor::<8>::new();
        let mut echo = String::new();

        let err = feed_all(&mut editor, b"abcdefghij\n", &mut echo)
            .unwrap()
            .unwrap_err();
        assert_eq!(err, Error::from(CommandError::LineTooLong { length: 10, max: 8 }));
        assert_eq!(echo, "abcdefg\n");

        let line = feed_all(&mut editor, b"abc\n", &mut echo).unwrap().unwrap();
        assert_eq!(line.as_str(), "abc");
    }

    #[test]
    fn test_erasing_back_under_limit_accepts_line() {
        let mut editor = LineEditor::<50>::new();
        let mut echo = String::new();
        let mut input = std::vec::Vec::from(&b"get_stepper_status"[..]);
        input.extend([b'x'; 40]);

        // 18 + 40 bytes typed, 49 fit
        assert!(feed_all(&mut editor, &input, &mut echo).is_none());
        assert_eq!(editor.pending().len(), 49);

        // Still 1 byte over
        let mut still_long = editor.clone();
        let mut erase = std::vec![0x7f; 8];
        erase.push(b'\n');
        let err = feed_all(&mut still_long, &erase, &mut echo)
            .unwrap()
            .unwrap_err();
        assert_eq!(err, Error::from(CommandError::LineTooLong { length: 50, max: 50 }));

        let mut erase = std::vec![0x7f; 40];
        erase.push(b'\n');
        let line = feed_all(&mut editor, &erase, &mut echo).unwrap().unwrap();
        assert_eq!(line.as_str(), "get_stepper_status");
    }

    #[test]
    fn test_typing_after_overflow_is_dropped() {
        let mut editor = LineEditor::<8>::new();
        let mut echo = String::new();

        // Later bytes keep dropping until the dropped ones are erased
        let err = feed_all(&mut editor, b"abcdefghij\x7fk\n", &mut echo)
            .unwrap()
            .unwrap_err();
        assert_eq!(err, Error::from(CommandError::LineTooLong { length: 10, max: 8 }));
    }

    #[test]
    fn test_poll_from_closure() {
        let mut editor = LineEditor::<50>::new();
        let mut echo = String::new();
        let mut input = b"ok\n".iter().copied();
        let mut source = move || input.next();

        assert!(editor.poll(&mut source, &mut echo).is_none());
        assert!(editor.poll(&mut source, &mut echo).is_none());
        assert_eq!(
            editor.poll(&mut source, &mut echo).unwrap().unwrap().as_str(),
            "ok"
        );
        assert!(editor.poll(&mut source, &mut echo).is_none());
    }
}
