//! Document model for parsed API comments.
//!
//! A [`Document`] owns its [`CommentBlock`]s, and each block owns its
//! [`Entry`] list in source order. Nothing is mutated after `parse` returns.

use serde::Serialize;
use std::ops::Range;

/// Every `/** ... */` block found in one input, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<CommentBlock>,
}

impl Document {
    pub fn blocks(&self) -> &[CommentBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All entries of all blocks, flattened in source order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.blocks.iter().flat_map(|b| b.entries.iter())
    }
}

/// One `/** ... */` region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommentBlock {
    pub entries: Vec<Entry>,
    /// Byte range of each entry, parallel to `entries`. A tag's range runs
    /// from its `@` to the end of its last sub-field; line-based entries stop
    /// before the `\n`.
    pub entry_spans: Vec<Range<usize>>,
    /// Byte range from the opening `/**` to just past the closing `*/`.
    pub span: Range<usize>,
}

impl CommentBlock {
    /// Entries paired with their byte ranges.
    pub fn spanned(&self) -> impl Iterator<Item = (&Entry, Range<usize>)> {
        self.entries.iter().zip(self.entry_spans.iter().cloned())
    }
}

/// A single parsed line unit inside a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entry {
    /// `@function name`
    FunctionTag { name: String },
    /// `@class name`
    ClassTag { name: String },
    /// `@param {type} name - description`
    ParamTag {
        #[serde(rename = "type")]
        ty: String,
        name: String,
        description: String,
    },
    /// `@property {type} name - description`
    PropertyTag {
        #[serde(rename = "type")]
        ty: String,
        name: String,
        description: String,
    },
    /// `@returns {type} description`
    ReturnsTag {
        #[serde(rename = "type")]
        ty: String,
        description: String,
    },
    /// Any line that is not a recognized tag.
    #[serde(rename = "doc_text")]
    TextLine { content: String },
}

impl Entry {
    /// Node name used by the tree dumps (and the JSON `kind` field).
    pub fn kind(&self) -> &'static str {
        match self {
            Entry::FunctionTag { .. } => "function_tag",
            Entry::ClassTag { .. } => "class_tag",
            Entry::ParamTag { .. } => "param_tag",
            Entry::PropertyTag { .. } => "property_tag",
            Entry::ReturnsTag { .. } => "returns_tag",
            Entry::TextLine { .. } => "doc_text",
        }
    }

    /// The identifier carried by named tags.
    pub fn name(&self) -> Option<&str> {
        match self {
            Entry::FunctionTag { name }
            | Entry::ClassTag { name }
            | Entry::ParamTag { name, .. }
            | Entry::PropertyTag { name, .. } => Some(name),
            Entry::ReturnsTag { .. } | Entry::TextLine { .. } => None,
        }
    }

    pub fn is_tag(&self) -> bool {
        !matches!(self, Entry::TextLine { .. })
    }
}

/// Human-readable location of a byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    /// 1-based line.
    pub line: usize,
    /// 1-based column, counted in chars.
    pub column: usize,
}

impl Position {
    /// Locate `offset` inside `source`. Offsets past the end clamp to the end;
    /// offsets inside a multi-byte char resolve to that char.
    pub fn locate(source: &str, offset: usize) -> Position {
        let mut end = offset.min(source.len());
        while !source.is_char_boundary(end) {
            end -= 1;
        }
        let before = &source[..end];
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        Position {
            line: before.matches('\n').count() + 1,
            column: before[line_start..].chars().count() + 1,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_first_line() {
        assert_eq!(Position::locate("/** x */", 4), Position { line: 1, column: 5 });
    }

    #[test]
    fn locate_after_newlines() {
        let src = "a\nbc\n/**";
        assert_eq!(Position::locate(src, 5), Position { line: 3, column: 1 });
        assert_eq!(Position::locate(src, 3), Position { line: 2, column: 2 });
    }

    #[test]
    fn locate_counts_chars_not_bytes() {
        let src = "数値 @x";
        assert_eq!(Position::locate(src, "数値 ".len()), Position { line: 1, column: 4 });
    }

    #[test]
    fn locate_clamps_past_end() {
        assert_eq!(Position::locate("ab", 99), Position { line: 1, column: 3 });
    }

    #[test]
    fn entry_names() {
        let e = Entry::ParamTag {
            ty: "number".into(),
            name: "a".into(),
            description: String::new(),
        };
        assert_eq!(e.name(), Some("a"));
        assert_eq!(e.kind(), "param_tag");
        assert!(e.is_tag());

        let t = Entry::TextLine { content: "hello".into() };
        assert_eq!(t.name(), None);
        assert!(!t.is_tag());
    }

    #[test]
    fn entries_flatten_in_order() {
        let doc = Document {
            blocks: vec![
                CommentBlock {
                    entries: vec![Entry::FunctionTag { name: "a".into() }],
                    entry_spans: vec![4..15],
                    span: 0..18,
                },
                CommentBlock {
                    entries: vec![Entry::ClassTag { name: "B".into() }],
                    entry_spans: vec![23..31],
                    span: 19..34,
                },
            ],
        };
        let names: Vec<_> = doc.entries().filter_map(Entry::name).collect();
        assert_eq!(names, ["a", "B"]);
        assert_eq!(doc.len(), 2);

        let (entry, span) = doc.blocks()[1].spanned().next().unwrap();
        assert_eq!(entry.name(), Some("B"));
        assert_eq!(span, 23..31);
    }
}
