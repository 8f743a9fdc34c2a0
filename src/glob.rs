//! A restricted wildcard matcher.
//!
//! A pattern is split on `*` into literal parts. Each part remembers which
//! [`Wildcard`] governs the gap in front of it: a single `*` may not cross a
//! path separator, two or more may. Matching is plain backtracking over the
//! occurrences of each literal.

use crate::constants::SEPARATOR;
use log::trace;
use std::fmt;

/// How permissive the gap before a literal is.
///
/// Ordered from least to most permissive, so merging two requirements is
/// simply `a.max(b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Wildcard {
    /// Only an empty gap.
    #[default]
    Nothing,
    /// Any run of characters without a path separator.
    Some,
    /// Any run of characters.
    All,
}

impl Wildcard {
    /// Checks whether `gap` is allowed by this wildcard.
    pub fn admits(self, gap: &str) -> bool {
        match self {
            Wildcard::Nothing => gap.is_empty(),
            Wildcard::Some => !gap.contains(SEPARATOR),
            Wildcard::All => true,
        }
    }
}

impl fmt::Display for Wildcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Wildcard::Nothing => "",
            Wildcard::Some => "*",
            Wildcard::All => "**",
        };
        f.write_str(s)
    }
}

/// One literal of a compiled pattern together with the wildcard in front of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    pub wildcard: Wildcard,
    pub literal: String,
}

/// A compiled wildcard pattern.
///
/// The part list is never empty and only its last element has an empty
/// literal. That terminal part's wildcard is checked against whatever is left
/// of the candidate once all literals are found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glob {
    parts: Vec<Part>,
}

impl Glob {
    /// Compiles `pattern` anchored at both ends.
    ///
    /// # Examples
    ///
    /// ```
    /// use ignorewalk::glob::Glob;
    ///
    /// let glob = Glob::new("*.wav");
    /// assert!(glob.is_match("test.wav"));
    /// assert!(!glob.is_match("dir/test.wav"));
    /// ```
    pub fn new(pattern: &str) -> Self {
        Self::with_wildcards(Wildcard::Nothing, pattern, Wildcard::Nothing)
    }

    /// Compiles `pattern` with an implicit wildcard before (`front`) and after (`back`) it.
    pub fn with_wildcards(front: Wildcard, pattern: &str, back: Wildcard) -> Self {
        if pattern.is_empty() {
            return Self {
                parts: vec![Part {
                    wildcard: front.max(back),
                    literal: String::new(),
                }],
            };
        }

        let mut parts = Vec::new();
        let mut wildcard = front;
        let mut rest = pattern;
        while !rest.is_empty() {
            let stars = rest.len() - rest.trim_start_matches('*').len();
            if stars > 0 {
                let run = if stars == 1 {
                    Wildcard::Some
                } else {
                    Wildcard::All
                };
                wildcard = wildcard.max(run);
                rest = &rest[stars..];
                continue;
            }

            let end = rest.find('*').unwrap_or(rest.len());
            parts.push(Part {
                wildcard,
                literal: rest[..end].to_string(),
            });
            wildcard = Wildcard::Nothing;
            rest = &rest[end..];
        }
        parts.push(Part {
            wildcard: wildcard.max(back),
            literal: String::new(),
        });

        for part in &parts {
            trace!("Glob part: wildcard={:?} literal={:?}", part.wildcard, part.literal);
        }
        Self { parts }
    }

    /// The compiled parts, in match order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Checks whether the whole of `candidate` matches this pattern.
    pub fn is_match(&self, candidate: &str) -> bool {
        self.match_from(0, candidate)
    }

    fn match_from(&self, part_ix: usize, rest: &str) -> bool {
        let Some(part) = self.parts.get(part_ix) else {
            return true;
        };

        if part.literal.is_empty() {
            debug_assert_eq!(part_ix + 1, self.parts.len());
            return part.wildcard.admits(rest);
        }

        // Overlapping occurrences count: advance one character past each hit.
        let step = part.literal.chars().next().map_or(1, char::len_utf8);
        let mut search_pos = 0;
        while let Some(found) = rest[search_pos..].find(part.literal.as_str()) {
            let ix = search_pos + found;
            if part.wildcard.admits(&rest[..ix])
                && self.match_from(part_ix + 1, &rest[ix + part.literal.len()..])
            {
                return true;
            }
            search_pos = ix + step;
            if search_pos > rest.len() {
                break;
            }
        }
        false
    }
}

impl fmt::Display for Glob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            write!(f, "{}{}", part.wildcard, part.literal)?;
        }
        Ok(())
    }
}
