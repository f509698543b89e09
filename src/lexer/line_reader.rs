use std::io::{self, BufRead};

/// One line of input with its terminator stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: u32,
    pub text: String,
}

/// Delivers a buffered stream one numbered line at a time.
pub struct LineReader<R> {
    reader: R,
    line_number: u32,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        LineReader {
            reader,
            line_number: 0,
        }
    }

    /// Number of the last line handed out, 0 before the first.
    pub fn line_number(&self) -> u32 {
        self.line_number
    }

    /// Reads the next line, or `Ok(None)` once the stream is exhausted.
    ///
    /// A line that is not valid UTF-8 is consumed and counted before the
    /// error is returned, so later lines keep their numbers.
    pub fn next_line(&mut self) -> io::Result<Option<Line>> {
        let mut text = String::new();
        match self.reader.read_line(&mut text) {
            Ok(0) => return Ok(None),
            Ok(_) => {}
            Err(error) => {
                if error.kind() == io::ErrorKind::InvalidData {
                    self.line_number += 1;
                }
                return Err(error);
            }
        }

        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }

        self.line_number += 1;
        Ok(Some(Line {
            number: self.line_number,
            text,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::{Line, LineReader};

    #[test]
    fn test_next_line_numbers_and_strips_terminators() {
        let mut reader = LineReader::new("a\r\nb\n\nc".as_bytes());

        let expected = [(1, "a"), (2, "b"), (3, ""), (4, "c")];
        for (number, text) in expected {
            assert_eq!(
                reader.next_line().unwrap(),
                Some(Line {
                    number,
                    text: text.to_string()
                })
            );
        }

        assert_eq!(reader.next_line().unwrap(), None);
        assert_eq!(reader.line_number(), 4);
    }

    #[test]
    fn test_next_line_reports_invalid_utf8() {
        let mut reader = LineReader::new(&b"ok\n\xff\xfe\n"[..]);

        assert!(reader.next_line().unwrap().is_some());
        assert!(reader.next_line().is_err());
        assert_eq!(reader.line_number(), 2);
    }

    #[test]
    fn test_next_line_counts_invalid_utf8_line() {
        let mut reader = LineReader::new(&b"\xff\nx\n"[..]);

        assert!(reader.next_line().is_err());
        assert_eq!(
            reader.next_line().unwrap(),
            Some(Line {
                number: 2,
                text: "x".to_string()
            })
        );
    }
}
