//! Splits a UTF-8 byte stream into lines.
//!
//! A line ends at `\n`, `\r\n` or a lone `\r` (universal newlines), so LF,
//! CRLF and old Mac files read the same. A trailing line without a terminator
//! still counts, a trailing terminator does not open an empty one.
//!
//! Decoding happens per line, so a bad byte sequence is reported with the
//! line it sits on and every earlier line has already been handed out.

use std::io::{self, BufRead};

pub struct Lines<R> {
    inner: R,
    buf: Vec<u8>,
    line_no: usize,
    finished: bool,
}

impl<R: BufRead> Lines<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            line_no: 0,
            finished: false,
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        let mut read_any = false;

        loop {
            let available = match self.inner.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                break;
            }
            read_any = true;

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(at) => {
                    let terminator = available[at];
                    self.buf.extend_from_slice(&available[..at]);
                    self.inner.consume(at + 1);
                    if terminator == b'\r' {
                        self.skip_lf()?;
                    }
                    break;
                }
                None => {
                    let len = available.len();
                    self.buf.extend_from_slice(available);
                    self.inner.consume(len);
                }
            }
        }

        if !read_any {
            return Ok(None);
        }
        self.line_no += 1;

        let bytes = std::mem::take(&mut self.buf);
        String::from_utf8(bytes).map(Some).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {} is not valid UTF-8: {}", self.line_no, e.utf8_error()),
            )
        })
    }

    /// After a `\r`: swallow the `\n` of a CRLF pair, which may sit in the
    /// next buffer fill.
    fn skip_lf(&mut self) -> io::Result<()> {
        loop {
            match self.inner.fill_buf() {
                Ok(available) => {
                    if available.first() == Some(&b'\n') {
                        self.inner.consume(1);
                    }
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.read_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.finished = true;
                None
            }
            // no resync after a bad read
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(src: &[u8]) -> Vec<String> {
        Lines::new(src).collect::<io::Result<_>>().unwrap()
    }

    #[test]
    fn strips_lf_and_crlf() {
        assert_eq!(collect(b"one\ntwo\r\nthree"), vec!["one", "two", "three"]);
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        assert_eq!(collect(b"a\n\nb\n"), vec!["a", "", "b"]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(collect(b"").is_empty());
    }

    #[test]
    fn lone_cr_ends_a_line() {
        assert_eq!(collect(b"a\rb\nc\r"), vec!["a", "b", "c"]);
        assert_eq!(collect(b"\r\r\n"), vec!["", ""]);
    }

    #[test]
    fn crlf_split_across_buffer_fills() {
        let src = io::BufReader::with_capacity(3, &b"ab\r\ncd\r"[..]);
        let lines: Vec<String> = Lines::new(src).collect::<io::Result<_>>().unwrap();
        assert_eq!(lines, vec!["ab", "cd"]);
    }

    #[test]
    fn keeps_multibyte_and_bom() {
        assert_eq!(
            collect("\u{feff}héllo\nwörld\n".as_bytes()),
            vec!["\u{feff}héllo", "wörld"]
        );
    }

    #[test]
    fn invalid_utf8_stops_with_line_number() {
        let mut lines = Lines::new(&b"ok\n\xff\xfe\nnever\n"[..]);

        assert_eq!(lines.next().unwrap().unwrap(), "ok");

        let err = lines.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("line 2"));

        assert!(lines.next().is_none());
    }
}
