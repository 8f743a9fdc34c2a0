//! A borrowed string cursor for line-oriented parsing.
//!
//! `Cursor` never owns its text; every operation narrows the view.

/// A non-owning view over a `&str` that is consumed from the front or back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor<'a> {
    s: &'a str,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s }
    }

    pub fn as_str(&self) -> &'a str {
        self.s
    }

    pub fn is_empty(&self) -> bool {
        self.s.is_empty()
    }

    pub fn back(&self) -> Option<char> {
        self.s.chars().next_back()
    }

    /// Pops the next line, without its terminator.
    ///
    /// `\n`, `\r\n` and a bare `\r` all end a line. Returns `None` once the
    /// cursor is exhausted; a trailing terminator does not produce an extra
    /// empty line.
    pub fn pop_line(&mut self) -> Option<Cursor<'a>> {
        if self.s.is_empty() {
            return None;
        }
        let (line, rest) = match self.s.find(['\n', '\r']) {
            Some(ix) => {
                let terminator = if self.s[ix..].starts_with("\r\n") { 2 } else { 1 };
                (&self.s[..ix], &self.s[ix + terminator..])
            }
            None => (self.s, ""),
        };
        self.s = rest;
        Some(Cursor::new(line))
    }

    /// Strips leading characters contained in `chars`, returns how many were removed.
    pub fn strip_left(&mut self, chars: &str) -> usize {
        let stripped = self.s.trim_start_matches(|c: char| chars.contains(c));
        let count = self.s[..self.s.len() - stripped.len()].chars().count();
        self.s = stripped;
        count
    }

    /// Strips trailing characters contained in `chars`, returns how many were removed.
    pub fn strip_right(&mut self, chars: &str) -> usize {
        let stripped = self.s.trim_end_matches(|c: char| chars.contains(c));
        let count = self.s[stripped.len()..].chars().count();
        self.s = stripped;
        count
    }

    /// Consumes `ch` if it is the first character.
    pub fn pop_if(&mut self, ch: char) -> bool {
        match self.s.strip_prefix(ch) {
            Some(rest) => {
                self.s = rest;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(s: &str) -> Vec<&str> {
        let mut cursor = Cursor::new(s);
        let mut out = Vec::new();
        while let Some(line) = cursor.pop_line() {
            out.push(line.as_str());
        }
        out
    }

    #[test]
    fn test_pop_line_endings() {
        assert_eq!(lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(lines("a\r\nb\r\n"), vec!["a", "b"]);
        assert_eq!(lines("a\rb"), vec!["a", "b"]);
        assert_eq!(lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(lines("a\r\rb"), vec!["a", "", "b"]);
        assert!(lines("").is_empty());
    }

    #[test]
    fn test_strip() {
        let mut cursor = Cursor::new("  \tabc \t");
        assert_eq!(cursor.strip_left(" \t"), 3);
        assert_eq!(cursor.strip_right(" \t"), 2);
        assert_eq!(cursor.as_str(), "abc");
        assert_eq!(cursor.strip_left(" "), 0);
    }

    #[test]
    fn test_pop_if_and_back() {
        let mut cursor = Cursor::new("!/build/");
        assert!(cursor.pop_if('!'));
        assert!(!cursor.pop_if('!'));
        assert!(cursor.pop_if('/'));
        assert_eq!(cursor.as_str(), "build/");
        assert_eq!(cursor.back(), Some('/'));
        assert_eq!(Cursor::new("").back(), None);
    }
}
