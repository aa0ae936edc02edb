//! Mutable selection state for a single diff-viewing context.
//!
//! [`LineSelection`] is the one stateful piece of the crate: it owns the set
//! of selected line keys, the hunk scope they belong to, and the quote-armed
//! flag. Every view constructs and owns its own instance; there is no global
//! store. All mutation happens synchronously through [`LineSelection::toggle`],
//! [`LineSelection::quote`] and [`LineSelection::clear`]; the grouped view and
//! the [`DiffSelection`] projection are recomputed on read.

use std::collections::HashSet;
use std::num::NonZeroU32;

use crate::content::{Clipboard, ContentSection, SectionLine};
use crate::group::{SelectedLine, group_selected};
use crate::key::{HunkKey, LineKey, LineSelector, decode_hunk_key, encode_hunk_key, encode_line_key};

/// One click on a diff row, as reported by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClick {
    /// Zero-based position of the clicked row within its hunk
    pub index: u32,
    /// Pre-image line number, absent for pure insertions
    pub old_line: Option<NonZeroU32>,
    /// Post-image line number, absent for pure deletions
    pub new_line: Option<NonZeroU32>,
    /// True for a plain click (replaces the selection), false for a
    /// modified click (extends it). How input gestures map onto this flag
    /// is the rendering layer's policy.
    pub reset_selection: bool,
}

/// A finalized selection, ready to be quoted into a message.
///
/// Produced by [`LineSelection::diff_selection`] only once every readiness
/// precondition holds; immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSelection {
    pub diff_sha: String,
    pub file_name: String,
    pub hunk_index: u32,
    /// Selected rows ascending by index, with run-boundary flags
    pub lines: Vec<SelectedLine>,
}

/// Selection state for one diff view.
///
/// A selection always spans exactly one hunk of one file: clicking into a
/// different hunk discards whatever was selected before. Every key in the
/// selected set was encoded under the current scope.
#[derive(Debug, Default)]
pub struct LineSelection {
    diff_sha: Option<String>,
    scope: Option<HunkKey>,
    selected: HashSet<LineKey>,
    quote_armed: bool,
}

impl LineSelection {
    /// Create an empty selection for a freshly opened diff view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a line in response to a click.
    ///
    /// The diff sha is adopted unconditionally (last click wins). A click
    /// into a different `(file, hunk)` scope first clears the selection. A
    /// plain click (`reset_selection`) also clears it, unless the clicked
    /// line is already the sole selected one; in that case the fall-through
    /// toggle removes it instead of pointlessly re-selecting it.
    pub fn toggle(&mut self, file_name: &str, hunk_index: u32, diff_sha: &str, click: LineClick) {
        self.diff_sha = Some(diff_sha.to_string());

        let scope = encode_hunk_key(file_name, hunk_index);
        if self.scope.as_ref() != Some(&scope) {
            log::debug!("selection scope moved to {}", scope.as_str());
            self.selected.clear();
            self.scope = Some(scope);
        }

        let key = encode_line_key(&LineSelector {
            index: click.index,
            old_line: click.old_line,
            new_line: click.new_line,
        });

        let is_sole_selection = self.selected.len() == 1 && self.selected.contains(&key);
        if click.reset_selection && !is_sole_selection {
            self.selected.clear();
        }

        if !self.selected.remove(&key) {
            self.selected.insert(key);
        }
    }

    /// Arm the selection for quoting. Idempotent.
    pub fn quote(&mut self) {
        self.quote_armed = true;
    }

    /// Drop all selection state, returning to the freshly constructed one.
    /// Called on view dismissal or explicit cancel.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.scope = None;
        self.diff_sha = None;
        self.quote_armed = false;
    }

    /// The current selection ordered by row index, with run-boundary flags.
    ///
    /// Recomputed on every call from the selected-key set.
    pub fn selected_lines(&self) -> Vec<SelectedLine> {
        group_selected(&self.selected)
    }

    /// The finalized selection, or `None` while any readiness precondition
    /// is unmet: quoting not armed, no scope, empty grouped selection, or
    /// no diff sha. Absence means "nothing to quote yet", not an error.
    pub fn diff_selection(&self) -> Option<DiffSelection> {
        if !self.quote_armed {
            return None;
        }
        let scope = self.scope.as_ref()?;
        let diff_sha = self.diff_sha.as_ref()?;

        let lines = self.selected_lines();
        if lines.is_empty() {
            return None;
        }

        let (file_name, hunk_index) = decode_hunk_key(scope.as_str()).ok()?;
        Some(DiffSelection {
            diff_sha: diff_sha.clone(),
            file_name,
            hunk_index,
            lines,
        })
    }

    /// Copy the selected lines' text to the clipboard, in row order.
    ///
    /// Copy is its own user action and ignores the quote-armed flag. No-op
    /// when nothing is selected.
    pub fn copy(&self, sections: &[ContentSection], clipboard: &mut dyn Clipboard) {
        let Some(text) = self.copy_text(sections) else {
            return;
        };
        clipboard.set_text(&text);
    }

    /// The text `copy` would place on the clipboard, or `None` when the
    /// selection is empty.
    ///
    /// Each selected line is matched to the content row with the same
    /// `(before, after)` line number pair; lines with no matching row (for
    /// example selected before the sections were reloaded) are skipped.
    pub fn copy_text(&self, sections: &[ContentSection]) -> Option<String> {
        let selected = self.selected_lines();
        if selected.is_empty() {
            return None;
        }

        let rows: Vec<&SectionLine> = sections
            .iter()
            .flat_map(|section| &section.lines)
            .collect();

        let mut buffer = Vec::new();
        for line in &selected {
            let row = rows.iter().find(|row| {
                row.before_line_number == line.selector.old_line
                    && row.after_line_number == line.selector.new_line
            });

            if let Some(row) = row {
                buffer.push(row.content.as_str());
            }
        }

        Some(buffer.join("\n"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn click(index: u32, reset: bool) -> LineClick {
        LineClick {
            index,
            old_line: None,
            new_line: NonZeroU32::new(index + 10),
            reset_selection: reset,
        }
    }

    fn indices(selection: &LineSelection) -> Vec<u32> {
        selection
            .selected_lines()
            .iter()
            .map(|line| line.selector.index)
            .collect()
    }

    #[test]
    fn toggle_selects_then_deselects() {
        let mut selection = LineSelection::new();
        selection.toggle("a.rs", 0, "sha1", click(3, false));
        assert_eq!(indices(&selection), vec![3]);

        selection.toggle("a.rs", 0, "sha1", click(3, false));
        assert!(indices(&selection).is_empty());
    }

    #[test]
    fn modified_clicks_extend_the_selection() {
        let mut selection = LineSelection::new();
        selection.toggle("a.rs", 0, "sha1", click(3, false));
        selection.toggle("a.rs", 0, "sha1", click(4, false));
        assert_eq!(indices(&selection), vec![3, 4]);
    }

    #[test]
    fn plain_click_replaces_the_selection() {
        let mut selection = LineSelection::new();
        selection.toggle("a.rs", 0, "sha1", click(3, false));
        selection.toggle("a.rs", 0, "sha1", click(4, false));

        selection.toggle("a.rs", 0, "sha1", click(7, true));
        assert_eq!(indices(&selection), vec![7]);
    }

    #[test]
    fn plain_click_on_sole_selected_line_deselects_it() {
        let mut selection = LineSelection::new();
        selection.toggle("a.rs", 0, "sha1", click(3, true));
        assert_eq!(indices(&selection), vec![3]);

        // Repeated plain click on the only selected line toggles it off
        // instead of clearing and re-selecting it
        selection.toggle("a.rs", 0, "sha1", click(3, true));
        assert!(indices(&selection).is_empty());
    }

    #[test]
    fn switching_hunk_clears_prior_selection() {
        let mut selection = LineSelection::new();
        selection.toggle("a.rs", 0, "sha1", click(1, false));
        selection.toggle("b.rs", 1, "sha1", click(2, false));
        assert_eq!(indices(&selection), vec![2]);
    }

    #[test]
    fn switching_hunk_within_same_file_clears_too() {
        let mut selection = LineSelection::new();
        selection.toggle("a.rs", 0, "sha1", click(1, false));
        selection.toggle("a.rs", 1, "sha1", click(5, false));
        assert_eq!(indices(&selection), vec![5]);
    }

    #[test]
    fn last_clicked_sha_wins() {
        let mut selection = LineSelection::new();
        selection.toggle("a.rs", 0, "old-sha", click(1, false));
        selection.toggle("a.rs", 0, "new-sha", click(2, false));
        selection.quote();

        let result = selection.diff_selection().unwrap();
        assert_eq!(result.diff_sha, "new-sha");
    }

    #[test]
    fn diff_selection_absent_until_quote_armed() {
        let mut selection = LineSelection::new();
        selection.toggle("a.rs", 0, "sha1", click(3, false));
        assert!(selection.diff_selection().is_none());

        selection.quote();
        let result = selection.diff_selection().unwrap();
        assert_eq!(result.file_name, "a.rs");
        assert_eq!(result.hunk_index, 0);
        assert_eq!(result.diff_sha, "sha1");
        assert_eq!(result.lines.len(), 1);
    }

    #[test]
    fn diff_selection_absent_for_empty_selection() {
        let mut selection = LineSelection::new();
        selection.quote();
        assert!(selection.diff_selection().is_none());

        // Select then deselect: armed and scoped, but nothing left to quote
        selection.toggle("a.rs", 0, "sha1", click(3, false));
        selection.toggle("a.rs", 0, "sha1", click(3, false));
        assert!(selection.diff_selection().is_none());
    }

    #[test]
    fn quote_is_idempotent() {
        let mut selection = LineSelection::new();
        selection.toggle("a.rs", 0, "sha1", click(3, false));
        selection.quote();
        selection.quote();
        assert!(selection.diff_selection().is_some());
    }

    #[test]
    fn clear_resets_everything() {
        let mut selection = LineSelection::new();
        selection.toggle("a.rs", 0, "sha1", click(3, false));
        selection.quote();
        assert!(selection.diff_selection().is_some());

        selection.clear();
        assert!(indices(&selection).is_empty());
        assert!(selection.diff_selection().is_none());

        // Arming again without re-selecting still yields nothing
        selection.quote();
        assert!(selection.diff_selection().is_none());
    }

    #[test]
    fn malformed_click_with_no_line_numbers_is_kept() {
        let mut selection = LineSelection::new();
        selection.toggle(
            "a.rs",
            0,
            "sha1",
            LineClick {
                index: 2,
                old_line: None,
                new_line: None,
                reset_selection: false,
            },
        );
        assert_eq!(indices(&selection), vec![2]);
    }

    #[test]
    fn copy_text_none_when_nothing_selected() {
        let selection = LineSelection::new();
        assert!(selection.copy_text(&[]).is_none());
    }
}
