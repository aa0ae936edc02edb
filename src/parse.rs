//! Parsing of replay click tokens into structured clicks.
//!
//! The `replay` subcommand describes each click with a compact token whose
//! body is the line-key encoding itself.
//!
//! # Syntax
//!
//! `[^]INDEX:OLD:NEW` where:
//! - `^` (optional) marks a plain click, which replaces the current
//!   selection; without it the click extends the selection
//! - `INDEX` is the row's zero-based position within the hunk
//! - `OLD`/`NEW` are 1-based pre-/post-image line numbers, or `-` on the
//!   side where the row does not exist
//!
//! # Examples
//!
//! ```
//! use diff_select::parse::parse_click;
//!
//! // Extend the selection with an inserted row
//! let click = parse_click("3:-:12").unwrap();
//! assert_eq!(click.index, 3);
//! assert!(!click.reset_selection);
//!
//! // Plain click on a deleted row
//! let click = parse_click("^5:9:-").unwrap();
//! assert!(click.reset_selection);
//! ```

use error_set::error_set;

use crate::key::{KeyError, decode_line_key};
use crate::selection::LineClick;

error_set! {
    /// Errors from parsing replay click tokens
    ParseError := {
        /// Token is empty or whitespace
        #[display("Empty click token")]
        EmptyClick,
        /// Token body is not a valid line key
        KeyError(KeyError),
    }
}

/// Parse a replay click token.
///
/// # Errors
///
/// Returns [`ParseError`] if the token is empty or its body is not a valid
/// `INDEX:OLD:NEW` line key.
pub fn parse_click(input: &str) -> Result<LineClick, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::EmptyClick);
    }

    let (reset_selection, body) = match input.strip_prefix('^') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let selector = decode_line_key(body)?;
    Ok(LineClick {
        index: selector.index,
        old_line: selector.old_line,
        new_line: selector.new_line,
        reset_selection,
    })
}
