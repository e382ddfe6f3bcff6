//! Scanner
//!
//!     The scanner splits raw text into a lazy sequence of lines, each stripped
//!     of its terminating `\r?\n`. Input without a trailing newline still
//!     yields its final line. The scanner imposes no line length bound of its
//!     own: bounding happens inside directive and content matching, where the
//!     captures live.
//!
//!     Scanning is a pure view over the source. [Scanner::lines] can be called
//!     any number of times, each starting over from the beginning.

/// A restartable line scanner over borrowed source text.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    source: &'a str,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// The underlying source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Iterate the source's lines from the start.
    pub fn lines(&self) -> ScanLines<'a> {
        ScanLines {
            rest: Some(self.source),
        }
    }
}

/// Iterator over scanned lines. `\n` and `\r\n` terminators are stripped.
#[derive(Debug, Clone)]
pub struct ScanLines<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for ScanLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        match rest.find('\n') {
            Some(newline) => {
                let line = rest[..newline].strip_suffix('\r').unwrap_or(&rest[..newline]);
                self.rest = Some(&rest[newline + 1..]);
                Some(line)
            }
            None => {
                self.rest = None;
                if rest.is_empty() {
                    None
                } else {
                    Some(rest)
                }
            }
        }
    }
}
