// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS identifier serialization.
//!
//! Ids and class names in a document may contain characters that are not
//! valid in a selector identifier (`:`, `.`, `#`, spaces, a leading digit).
//! [`write_ident`] serializes them with the same rules as the CSSOM
//! `CSS.escape()` function so the emitted selector stays parseable. Plain
//! identifiers pass through unchanged.

use alloc::string::String;
use core::fmt::{self, Write};

/// Writes `ident` to `out` as an escaped CSS identifier.
pub fn write_ident<W: Write + ?Sized>(out: &mut W, ident: &str) -> fmt::Result {
    let mut chars = ident.chars();
    let Some(first) = chars.next() else {
        return Ok(());
    };
    if first == '-' && ident.len() == 1 {
        return out.write_str("\\-");
    }
    write_code_point(out, first, 0, first)?;
    for (index, c) in chars.enumerate() {
        write_code_point(out, c, index + 1, first)?;
    }
    Ok(())
}

/// Returns `ident` escaped as a CSS identifier.
#[must_use]
pub fn escape_ident(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len());
    // Writing into a `String` cannot fail.
    let _ = write_ident(&mut out, ident);
    out
}

fn write_code_point<W: Write + ?Sized>(
    out: &mut W,
    c: char,
    index: usize,
    first: char,
) -> fmt::Result {
    match c {
        '\0' => out.write_char('\u{FFFD}'),
        '\u{1}'..='\u{1f}' | '\u{7f}' => write!(out, "\\{:x} ", u32::from(c)),
        '0'..='9' if index == 0 || (index == 1 && first == '-') => {
            write!(out, "\\{:x} ", u32::from(c))
        }
        c if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() => {
            out.write_char(c)
        }
        c => {
            out.write_char('\\')?;
            out.write_char(c)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_identifiers_are_unchanged() {
        assert_eq!(escape_ident("app"), "app");
        assert_eq!(escape_ident("nav-item_2"), "nav-item_2");
        assert_eq!(escape_ident("-webkit"), "-webkit");
        assert_eq!(escape_ident("caf\u{e9}"), "caf\u{e9}");
    }

    #[test]
    fn leading_digits_use_hex_escapes() {
        assert_eq!(escape_ident("1st"), "\\31 st");
        assert_eq!(escape_ident("-2x"), "-\\32 x");
        // Only the first (or the one after a leading dash) needs escaping.
        assert_eq!(escape_ident("a1"), "a1");
    }

    #[test]
    fn lone_dash_is_escaped() {
        assert_eq!(escape_ident("-"), "\\-");
        assert_eq!(escape_ident("--"), "--");
    }

    #[test]
    fn punctuation_is_backslash_escaped() {
        assert_eq!(escape_ident("a:b"), "a\\:b");
        assert_eq!(escape_ident("w-1/2"), "w-1\\/2");
        assert_eq!(escape_ident("x.y#z"), "x\\.y\\#z");
    }

    #[test]
    fn control_characters_and_nul() {
        assert_eq!(escape_ident("a\u{1}"), "a\\1 ");
        assert_eq!(escape_ident("a\u{7f}b"), "a\\7f b");
        assert_eq!(escape_ident("a\0"), "a\u{FFFD}");
    }

    #[test]
    fn empty_identifier_writes_nothing() {
        assert_eq!(escape_ident(""), "");
    }
}
