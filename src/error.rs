//! Parse error types.

use std::fmt;
use thiserror::Error;

/// Errors that abort a parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `/**` with no closing `*/` before end of input.
    #[error("unterminated comment block starting at byte {offset}")]
    UnterminatedBlock { offset: usize },

    /// A recognized tag whose required sub-fields did not parse.
    #[error("malformed {keyword} tag at byte {offset}: {fault}")]
    MalformedTag {
        keyword: TagKeyword,
        /// Byte offset of the `@`.
        offset: usize,
        fault: TagFault,
    },
}

impl ParseError {
    /// The most precise byte offset known for this error.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnterminatedBlock { offset } => *offset,
            ParseError::MalformedTag { fault, .. } => fault.offset(),
        }
    }
}

/// The tag keywords, in the order they are attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKeyword {
    Function,
    Class,
    Param,
    Property,
    Returns,
}

impl TagKeyword {
    pub const ALL: [TagKeyword; 5] = [
        TagKeyword::Function,
        TagKeyword::Class,
        TagKeyword::Param,
        TagKeyword::Property,
        TagKeyword::Returns,
    ];

    /// The keyword as written in source, including the `@`.
    pub fn as_str(self) -> &'static str {
        match self {
            TagKeyword::Function => "@function",
            TagKeyword::Class => "@class",
            TagKeyword::Param => "@param",
            TagKeyword::Property => "@property",
            TagKeyword::Returns => "@returns",
        }
    }
}

impl fmt::Display for TagKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which sub-field of a tag failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagField {
    Type,
    Identifier,
    Separator,
}

/// Why a tag's sub-field failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagFault {
    #[error("expected a `{{type}}` annotation at byte {offset}")]
    MissingType { offset: usize },

    #[error("malformed type annotation at byte {offset}: {problem}")]
    MalformedTypeAnnotation { offset: usize, problem: TypeProblem },

    #[error("expected an identifier at byte {offset}")]
    MissingIdentifier { offset: usize },

    #[error("expected `-` before the description at byte {offset}")]
    MissingSeparator { offset: usize },
}

impl TagFault {
    pub fn field(&self) -> TagField {
        match self {
            TagFault::MissingType { .. } | TagFault::MalformedTypeAnnotation { .. } => {
                TagField::Type
            }
            TagFault::MissingIdentifier { .. } => TagField::Identifier,
            TagFault::MissingSeparator { .. } => TagField::Separator,
        }
    }

    pub fn offset(&self) -> usize {
        match self {
            TagFault::MissingType { offset }
            | TagFault::MalformedTypeAnnotation { offset, .. }
            | TagFault::MissingIdentifier { offset }
            | TagFault::MissingSeparator { offset } => *offset,
        }
    }
}

/// What is wrong inside a `{...}` annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TypeProblem {
    #[error("no closing `}}` before end of line")]
    Unclosed,
    #[error("empty type")]
    Empty,
    #[error("nested `{{` is not allowed")]
    NestedBrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_tag_message_names_keyword_and_field() {
        let err = ParseError::MalformedTag {
            keyword: TagKeyword::Param,
            offset: 4,
            fault: TagFault::MissingType { offset: 11 },
        };
        assert_eq!(
            err.to_string(),
            "malformed @param tag at byte 4: expected a `{type}` annotation at byte 11"
        );
        assert_eq!(err.offset(), 11);
    }

    #[test]
    fn type_problem_message() {
        let fault = TagFault::MalformedTypeAnnotation {
            offset: 3,
            problem: TypeProblem::Unclosed,
        };
        assert_eq!(fault.field(), TagField::Type);
        assert!(fault.to_string().contains("no closing `}`"));
    }

    #[test]
    fn unterminated_offset() {
        let err = ParseError::UnterminatedBlock { offset: 7 };
        assert_eq!(err.offset(), 7);
        assert_eq!(err.to_string(), "unterminated comment block starting at byte 7");
    }
}
