//! Byte cursor over comment text with trivia skipping.
//!
//! Trivia ("extras") are runs of whitespace and runs of `*` optionally
//! followed by `!`. The cursor never skips the `*` of a closing `*/`, so a
//! decoration run like `**/` leaves exactly `*/` for the block parser.

use regex::Regex;

pub struct Scanner<'src> {
    src: &'src str,
    pos: usize,
}

impl<'src> Scanner<'src> {
    pub fn new(src: &'src str) -> Self {
        Self { src, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn rest(&self) -> &'src str {
        &self.src[self.pos..]
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn starts_with(&self, lit: &str) -> bool {
        self.rest().starts_with(lit)
    }

    /// Consume `lit` if the input continues with it.
    pub fn eat(&mut self, lit: &str) -> bool {
        if self.starts_with(lit) {
            self.pos += lit.len();
            true
        } else {
            false
        }
    }

    /// Consume the match of `re` anchored at the cursor. Patterns must start with `^`.
    pub fn eat_match(&mut self, re: &Regex) -> Option<&'src str> {
        let rest = self.rest();
        let m = re.find(rest)?;
        if m.start() != 0 || m.is_empty() {
            return None;
        }
        self.pos += m.end();
        Some(&rest[..m.end()])
    }

    /// Skip whitespace (newlines included) and `*`/`*!` decoration.
    pub fn skip_extras(&mut self) {
        loop {
            let rest = self.rest();
            let ws = rest.len() - rest.trim_start().len();
            if ws > 0 {
                self.pos += ws;
                continue;
            }

            let stars = rest.bytes().take_while(|&b| b == b'*').count();
            if stars == 0 {
                return;
            }
            if rest[stars..].starts_with('/') {
                // leave `*/` in place
                self.pos += stars - 1;
                return;
            }
            self.pos += stars;
            self.eat("!");
        }
    }

    /// Skip spaces and tabs without leaving the current line.
    pub fn skip_inline_space(&mut self) {
        let rest = self.rest();
        let n = rest.len() - rest.trim_start_matches(|c: char| c == ' ' || c == '\t').len();
        self.pos += n;
    }

    /// Consume up to (not including) the next newline. A trailing `\r` is
    /// consumed but not returned.
    pub fn rest_of_line(&mut self) -> &'src str {
        let rest = self.rest();
        let len = rest.find('\n').unwrap_or(rest.len());
        self.pos += len;
        let line = &rest[..len];
        line.strip_suffix('\r').unwrap_or(line)
    }

    /// Move to the next occurrence of `lit` at or after the cursor. On a miss
    /// the cursor moves to end of input.
    pub fn seek(&mut self, lit: &str) -> bool {
        match self.rest().find(lit) {
            Some(i) => {
                self.pos += i;
                true
            }
            None => {
                self.pos = self.src.len();
                false
            }
        }
    }
}
