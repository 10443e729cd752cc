//! Emit each line as a C-style string literal ending in an escaped newline.
//!
//! Content is copied verbatim. A `"` or `\` inside a line ends up unescaped
//! in the record; such lines are reported but written unchanged.

use std::io::{self, Write};

/// `hello` -> `"hello\n"` (backslash and `n` are two literal characters).
pub fn format_literal(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 4);
    out.push('"');
    out.push_str(line);
    out.push_str("\\n\"");
    out
}

/// True when the line would not survive as the body of a string literal.
pub fn needs_escaping(line: &str) -> bool {
    line.contains(['"', '\\'])
}

/// Writes one record per line, newline-terminated.
pub struct LiteralWriter<W: Write> {
    out: W,
    records: usize,
}

impl<W: Write> LiteralWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, records: 0 }
    }

    pub fn emit(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", format_literal(line))?;
        self.records += 1;
        Ok(())
    }

    pub fn finish(mut self) -> io::Result<usize> {
        self.out.flush()?;
        Ok(self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_plain_line() {
        assert_eq!(format_literal("hello"), r#""hello\n""#);
    }

    #[test]
    fn empty_line_is_just_the_marker() {
        assert_eq!(format_literal(""), r#""\n""#);
    }

    #[test]
    fn quotes_and_backslashes_pass_through() {
        assert_eq!(format_literal(r#"say "hi" \o/"#), r#""say "hi" \o/\n""#);
        assert!(needs_escaping(r#"say "hi""#));
        assert!(needs_escaping(r"C:\path"));
        assert!(!needs_escaping("gl_FragColor = vec4(1.0);"));
    }

    #[test]
    fn writer_counts_and_terminates_records() {
        let mut buf = Vec::new();
        let mut w = LiteralWriter::new(&mut buf);
        w.emit("x").unwrap();
        w.emit("").unwrap();
        assert_eq!(w.finish().unwrap(), 2);
        assert_eq!(buf, b"\"x\\n\"\n\"\\n\"\n");
    }
}
