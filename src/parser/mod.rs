//! Finds every `/** ... */` block in the input and parses it.
//!
//! Text outside blocks is ignored. Parsing stops at the first error; a
//! malformed or unterminated block never yields a partial document.

pub mod block;
pub mod scanner;
pub mod tags;

use crate::error::ParseError;
use crate::model::Document;
use scanner::Scanner;
use tracing::debug;

/// Parse every documentation block in `input`.
pub fn parse(input: &str) -> Result<Document, ParseError> {
    let mut scanner = Scanner::new(input);
    let mut blocks = Vec::new();

    while next_block(&mut scanner) {
        blocks.push(block::parse_block(&mut scanner)?);
    }

    debug!(blocks = blocks.len(), bytes = input.len(), "document parsed");
    Ok(Document { blocks })
}

/// Move to the next `/**` that opens a doc block. `/**/` is an empty plain
/// comment and is stepped over.
fn next_block(scanner: &mut Scanner) -> bool {
    while scanner.seek(block::OPEN) {
        if !scanner.starts_with("/**/") {
            return true;
        }
        scanner.eat("/**/");
    }
    false
}
