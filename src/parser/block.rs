//! Block parser: collects entries between `/**` and `*/`.

use super::scanner::Scanner;
use super::tags;
use crate::error::ParseError;
use crate::model::{CommentBlock, Entry};
use tracing::{debug, trace};

pub const OPEN: &str = "/**";
pub const CLOSE: &str = "*/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitingEntry,
    Done,
}

/// Parse one block. The scanner must sit on its opening `/**`.
pub fn parse_block(scanner: &mut Scanner) -> Result<CommentBlock, ParseError> {
    let start = scanner.pos();
    // Only `/*` is consumed; the remaining `*` (and a following `!`) is trivia.
    scanner.eat("/*");
    debug!(offset = start, "block opened");

    let mut entries = Vec::new();
    let mut entry_spans = Vec::new();
    let mut state = State::AwaitingEntry;
    while state == State::AwaitingEntry {
        scanner.skip_extras();
        if scanner.is_eof() {
            return Err(ParseError::UnterminatedBlock { offset: start });
        }
        if scanner.eat(CLOSE) {
            state = State::Done;
            continue;
        }

        let at = scanner.pos();
        let entry = next_entry(scanner)?;
        trace!(kind = entry.kind(), start = at, end = scanner.pos(), "entry");
        entries.push(entry);
        entry_spans.push(at..scanner.pos());
    }

    debug!(offset = start, entries = entries.len(), "block closed");
    Ok(CommentBlock {
        entries,
        entry_spans,
        span: start..scanner.pos(),
    })
}

/// A tag if a keyword matches, otherwise the rest of the line as text.
///
/// The cursor is past trivia and not on `*/`, so the text fallback always
/// consumes at least one char.
fn next_entry(scanner: &mut Scanner) -> Result<Entry, ParseError> {
    let at = scanner.pos();
    if let Some(keyword) = tags::match_keyword(scanner) {
        return tags::parse_tag(scanner, keyword, at);
    }
    Ok(Entry::TextLine {
        content: scanner.rest_of_line().to_string(),
    })
}
