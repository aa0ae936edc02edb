//! Line selection and contiguous-run grouping for diff hunks.
//!
//! This crate implements the state machine behind "select some lines of a
//! diff hunk, then quote or copy them": a per-view [`LineSelection`] store
//! that toggles lines in and out of the selection, a pure grouping step that
//! orders the selected rows and marks maximal runs of consecutive indices
//! (so a renderer can bracket each run as one block), and a readiness-gated
//! [`DiffSelection`] projection for quoting plus copy-to-clipboard of the
//! selected text.
//!
//! Everything is synchronous and confined to the view that owns the store:
//! clicks mutate state, the grouped view and the quote projection are
//! recomputed on read.
//!
//! # Examples
//!
//! ```
//! use diff_select::{LineClick, LineSelection};
//! use std::num::NonZeroU32;
//!
//! let click = |index: u32, new: u32, reset: bool| LineClick {
//!     index,
//!     old_line: None,
//!     new_line: NonZeroU32::new(new),
//!     reset_selection: reset,
//! };
//!
//! let mut selection = LineSelection::new();
//! selection.toggle("src/app.rs", 0, "4f2c9d", click(2, 12, true));
//! selection.toggle("src/app.rs", 0, "4f2c9d", click(3, 13, false));
//! selection.toggle("src/app.rs", 0, "4f2c9d", click(5, 15, false));
//!
//! // Rows 2 and 3 form one run, row 5 its own
//! let lines = selection.selected_lines();
//! assert_eq!(lines.len(), 3);
//! assert!(lines[0].is_first_of_group);
//! assert!(lines[1].is_last_of_group);
//! assert!(lines[2].is_first_of_group && lines[2].is_last);
//!
//! // Nothing to quote until the user commits
//! assert!(selection.diff_selection().is_none());
//! selection.quote();
//! let quoted = selection.diff_selection().unwrap();
//! assert_eq!(quoted.file_name, "src/app.rs");
//! assert_eq!(quoted.hunk_index, 0);
//! ```

pub mod content;
pub mod group;
pub mod key;
pub mod parse;
pub mod selection;

pub use content::{Clipboard, ContentSection, SectionLine, SystemClipboard};
pub use group::{SelectedLine, group_selected};
pub use key::{
    HunkKey, KeyError, LineKey, LineSelector, decode_hunk_key, decode_line_key, encode_hunk_key,
    encode_line_key,
};
pub use parse::{ParseError, parse_click};
pub use selection::{DiffSelection, LineClick, LineSelection};
