//! # apidoc
//!
//! Parser for `/** ... */` API documentation comments.
//!
//! Each block is read top to bottom into an ordered list of entries:
//! `@function`, `@class`, `@param`, `@property` and `@returns` tags, plus
//! free-text lines for everything else. Leading `*` decoration and blank
//! space are ignored.
//!
//! ```
//! use apidoc::{parse, Entry};
//!
//! let doc = parse("/** @function foo\n * @returns {void} nothing\n */").unwrap();
//! assert_eq!(
//!     doc.blocks[0].entries,
//!     vec![
//!         Entry::FunctionTag { name: "foo".into() },
//!         Entry::ReturnsTag { ty: "void".into(), description: "nothing".into() },
//!     ]
//! );
//! ```
//!
//! Parsing is a pure function of the input; independent inputs can be parsed
//! on separate threads without coordination.

pub mod error;
pub mod model;
pub mod parser;

pub use error::{ParseError, TagFault, TagField, TagKeyword, TypeProblem};
pub use model::{CommentBlock, Document, Entry, Position};
pub use parser::parse;
