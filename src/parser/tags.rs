//! Tag grammar: the five `@keyword` rules and their shared sub-fields.
//!
//! | keyword     | sequence                               |
//! |-------------|----------------------------------------|
//! | `@function` | identifier                             |
//! | `@class`    | identifier                             |
//! | `@param`    | type, identifier, `-`, description     |
//! | `@property` | type, identifier, `-`, description     |
//! | `@returns`  | type, description                      |
//!
//! Trivia is skipped before `type`, `identifier` and `-`. The description
//! only skips spaces and tabs, so it never reaches into the next line.

use super::scanner::Scanner;
use crate::error::{ParseError, TagFault, TagKeyword, TypeProblem};
use crate::model::Entry;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static RE_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@[A-Za-z_][A-Za-z0-9_]*").unwrap());

static RE_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap());

static RE_TYPE_BODY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^{}\n]+").unwrap());

/// Consume a recognized tag keyword at the cursor.
///
/// The whole `@word` must equal a keyword; `@functional` or `@Param` leave
/// the cursor untouched and return `None`.
pub fn match_keyword(scanner: &mut Scanner) -> Option<TagKeyword> {
    let word = RE_KEYWORD.find(scanner.rest())?.as_str();
    let keyword = TagKeyword::ALL.into_iter().find(|k| k.as_str() == word)?;
    scanner.eat(word);
    Some(keyword)
}

/// Parse the sub-fields of `keyword`, which has already been consumed.
/// `at` is the offset of its `@`.
pub fn parse_tag(
    scanner: &mut Scanner,
    keyword: TagKeyword,
    at: usize,
) -> Result<Entry, ParseError> {
    let mut rule = TagRule { scanner };
    rule.apply(keyword).map_err(|fault| {
        let err = ParseError::MalformedTag {
            keyword,
            offset: at,
            fault,
        };
        debug!("tag rejected: {}", err);
        err
    })
}

struct TagRule<'a, 'src> {
    scanner: &'a mut Scanner<'src>,
}

impl TagRule<'_, '_> {
    fn apply(&mut self, keyword: TagKeyword) -> Result<Entry, TagFault> {
        let entry = match keyword {
            TagKeyword::Function => Entry::FunctionTag {
                name: self.identifier()?,
            },
            TagKeyword::Class => Entry::ClassTag {
                name: self.identifier()?,
            },
            TagKeyword::Param => {
                let ty = self.ty()?;
                let name = self.identifier()?;
                self.separator()?;
                Entry::ParamTag {
                    ty,
                    name,
                    description: self.description(),
                }
            }
            TagKeyword::Property => {
                let ty = self.ty()?;
                let name = self.identifier()?;
                self.separator()?;
                Entry::PropertyTag {
                    ty,
                    name,
                    description: self.description(),
                }
            }
            TagKeyword::Returns => {
                let ty = self.ty()?;
                Entry::ReturnsTag {
                    ty,
                    description: self.description(),
                }
            }
        };
        Ok(entry)
    }

    /// `{` + one or more chars other than `{`, `}`, newline + `}`
    fn ty(&mut self) -> Result<String, TagFault> {
        self.scanner.skip_extras();
        let offset = self.scanner.pos();
        if !self.scanner.eat("{") {
            return Err(TagFault::MissingType { offset });
        }

        let body = self.scanner.eat_match(&RE_TYPE_BODY).unwrap_or("");
        let problem = match self.scanner.peek() {
            Some('}') if !body.is_empty() => {
                self.scanner.eat("}");
                return Ok(body.to_string());
            }
            Some('}') => TypeProblem::Empty,
            Some('{') => TypeProblem::NestedBrace,
            _ => TypeProblem::Unclosed,
        };
        Err(TagFault::MalformedTypeAnnotation { offset, problem })
    }

    fn identifier(&mut self) -> Result<String, TagFault> {
        self.scanner.skip_extras();
        let offset = self.scanner.pos();
        self.scanner
            .eat_match(&RE_IDENTIFIER)
            .map(str::to_string)
            .ok_or(TagFault::MissingIdentifier { offset })
    }

    fn separator(&mut self) -> Result<(), TagFault> {
        self.scanner.skip_extras();
        let offset = self.scanner.pos();
        if self.scanner.eat("-") {
            Ok(())
        } else {
            Err(TagFault::MissingSeparator { offset })
        }
    }

    /// Rest of the current line; may be empty.
    fn description(&mut self) -> String {
        self.scanner.skip_inline_space();
        self.scanner.rest_of_line().to_string()
    }
}
