// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing and matching for the selector dialect emitted by `understory_css_path`.
//!
//! Supported grammar:
//!
//! ```text
//! selector  := compound (whitespace+ compound)*
//! compound  := (tag | '*')? ('#' ident | '.' ident | ':nth-child(' digits ')')*
//! ```
//!
//! Whitespace between compounds is a descendant combinator. Identifiers may
//! use CSS escapes (`\:` or `\31 `); unescaped identifiers may not start with
//! a digit, or with a dash followed by a digit.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::str::FromStr;

use thiserror::Error;

use crate::document::{MemoryDocument, NodeId};

/// Why a selector failed to parse.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SelectorError {
    /// The selector was empty or only whitespace.
    #[error("empty selector")]
    Empty,
    /// A character that cannot appear at this position.
    #[error("unexpected `{found}` at byte {offset}")]
    Unexpected {
        /// The offending character.
        found: char,
        /// Byte offset of `found`.
        offset: usize,
    },
    /// The selector ended in the middle of a construct.
    #[error("unexpected end of selector")]
    UnexpectedEnd,
    /// `:nth-child()` with an argument other than a positive integer.
    #[error("invalid :nth-child() argument at byte {offset}")]
    InvalidNth {
        /// Byte offset of the argument.
        offset: usize,
    },
    /// A pseudo-class other than `:nth-child()`.
    #[error("unsupported pseudo-class `:{name}`")]
    UnsupportedPseudo {
        /// Name of the pseudo-class.
        name: String,
    },
}

/// A single-element selector: every present qualifier must hold.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Compound {
    /// Lowercase tag name; `None` for `*` or an omitted tag.
    pub tag: Option<String>,
    /// Required ids (more than one can never match distinct values).
    pub ids: Vec<String>,
    /// Required class tokens.
    pub classes: Vec<String>,
    /// Required one-based sibling position.
    pub nth_child: Option<usize>,
}

impl Compound {
    /// Returns `true` if `node` satisfies every qualifier.
    #[must_use]
    pub fn matches(&self, doc: &MemoryDocument, node: NodeId) -> bool {
        let element = doc.element(node);
        if let Some(tag) = &self.tag
            && !element.tag.eq_ignore_ascii_case(tag)
        {
            return false;
        }
        if !self.ids.iter().all(|id| *id == element.id) {
            return false;
        }
        if !self
            .classes
            .iter()
            .all(|class| element.class.split_ascii_whitespace().any(|c| c == class))
        {
            return false;
        }
        self.nth_child
            .is_none_or(|nth| doc.sibling_position(node) == nth)
    }
}

/// A chain of compounds joined by descendant combinators, root→target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    compounds: Vec<Compound>,
}

impl Selector {
    /// Parses `input`.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        Parser { input, pos: 0 }.selector()
    }

    /// The compounds, outermost first.
    #[must_use]
    pub fn compounds(&self) -> &[Compound] {
        &self.compounds
    }

    /// Returns `true` if `node` matches.
    ///
    /// The last compound must match `node`; each earlier compound must match
    /// some ancestor above the one matched by the compound after it.
    #[must_use]
    pub fn matches(&self, doc: &MemoryDocument, node: NodeId) -> bool {
        let Some((subject, ancestors)) = self.compounds.split_last() else {
            return false;
        };
        if !subject.matches(doc, node) {
            return false;
        }
        // Matching the nearest ancestor first is optimal when every
        // combinator is a descendant combinator.
        let mut cursor = doc.parent(node);
        for compound in ancestors.iter().rev() {
            loop {
                let Some(candidate) = cursor else {
                    return false;
                };
                cursor = doc.parent(candidate);
                if compound.matches(doc, candidate) {
                    break;
                }
            }
        }
        true
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn unexpected(&self) -> SelectorError {
        match self.peek() {
            Some(found) => SelectorError::Unexpected {
                found,
                offset: self.pos,
            },
            None => SelectorError::UnexpectedEnd,
        }
    }

    fn expect(&mut self, want: char) -> Result<(), SelectorError> {
        if self.peek() == Some(want) {
            self.pos += want.len_utf8();
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    /// Skips whitespace; returns `true` if any was skipped.
    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(is_whitespace) {
            self.pos += 1;
        }
        self.pos != start
    }

    fn selector(mut self) -> Result<Selector, SelectorError> {
        self.skip_whitespace();
        if self.peek().is_none() {
            return Err(SelectorError::Empty);
        }
        let mut compounds = Vec::new();
        loop {
            compounds.push(self.compound()?);
            let separated = self.skip_whitespace();
            if self.peek().is_none() {
                break;
            }
            if !separated {
                return Err(self.unexpected());
            }
        }
        Ok(Selector { compounds })
    }

    fn compound(&mut self) -> Result<Compound, SelectorError> {
        let start = self.pos;
        let mut compound = Compound::default();
        match self.peek() {
            Some('*') => {
                self.pos += 1;
            }
            Some(c) if c == '\\' || is_name_char(c) => {
                compound.tag = Some(self.ident()?.to_ascii_lowercase());
            }
            _ => {}
        }
        loop {
            match self.peek() {
                Some('#') => {
                    self.pos += 1;
                    compound.ids.push(self.ident()?);
                }
                Some('.') => {
                    self.pos += 1;
                    compound.classes.push(self.ident()?);
                }
                Some(':') => {
                    self.pos += 1;
                    let name = self.ident()?;
                    if !name.eq_ignore_ascii_case("nth-child") {
                        return Err(SelectorError::UnsupportedPseudo { name });
                    }
                    compound.nth_child = Some(self.nth_argument()?);
                }
                _ => break,
            }
        }
        if self.pos == start {
            return Err(self.unexpected());
        }
        Ok(compound)
    }

    fn nth_argument(&mut self) -> Result<usize, SelectorError> {
        self.expect('(')?;
        self.skip_whitespace();
        let offset = self.pos;
        let digits = self.input[self.pos..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        let value: usize = self.input[offset..offset + digits]
            .parse()
            .map_err(|_| SelectorError::InvalidNth { offset })?;
        if value == 0 {
            return Err(SelectorError::InvalidNth { offset });
        }
        self.pos += digits;
        self.skip_whitespace();
        self.expect(')')?;
        Ok(value)
    }

    fn ident(&mut self) -> Result<String, SelectorError> {
        let mut out = String::new();
        loop {
            match self.peek() {
                Some('\\') => {
                    self.pos += 1;
                    out.push(self.escape()?);
                }
                Some(c) if is_name_char(c) => {
                    let leading_digit =
                        c.is_ascii_digit() && (out.is_empty() || out == "-");
                    if leading_digit {
                        return Err(self.unexpected());
                    }
                    self.pos += c.len_utf8();
                    out.push(c);
                }
                _ => break,
            }
        }
        if out.is_empty() {
            return Err(self.unexpected());
        }
        Ok(out)
    }

    /// Decodes the escape after a backslash.
    fn escape(&mut self) -> Result<char, SelectorError> {
        let hex = self.input[self.pos..]
            .bytes()
            .take(6)
            .take_while(u8::is_ascii_hexdigit)
            .count();
        if hex == 0 {
            return self.bump().ok_or(SelectorError::UnexpectedEnd);
        }
        let digits = &self.input[self.pos..self.pos + hex];
        self.pos += hex;
        if self.peek().is_some_and(is_whitespace) {
            self.pos += 1;
        }
        let value = u32::from_str_radix(digits, 16).unwrap_or(0);
        Ok(char::from_u32(value)
            .filter(|c| *c != '\0')
            .unwrap_or('\u{FFFD}'))
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{c}')
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

impl core::fmt::Display for Compound {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag.as_deref().unwrap_or("*"))?;
        for id in &self.ids {
            write!(f, "#{}", understory_css_path::escape_ident(id))?;
        }
        for class in &self.classes {
            write!(f, ".{}", understory_css_path::escape_ident(class))?;
        }
        if let Some(nth) = self.nth_child {
            write!(f, ":nth-child({nth})")?;
        }
        Ok(())
    }
}

impl core::fmt::Display for Selector {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let parts: Vec<String> = self.compounds.iter().map(ToString::to_string).collect();
        f.write_str(&parts.join(" "))
    }
}
