//! Contiguous-run grouping of a selected-line set.
//!
//! The selection store keeps an unordered set of encoded line keys. Rendering
//! needs the same lines as an ordered sequence with run boundaries marked, so
//! a single visual bracket can be drawn around each contiguous block instead
//! of around every line. [`group_selected`] is that derivation: pure,
//! deterministic, and recomputed whenever the set changes.

use crate::key::{LineKey, LineSelector, decode_line_key};

/// A selected line annotated with run-boundary flags for rendering.
///
/// A run is a maximal set of selected rows whose `index` values are
/// consecutive integers. The flags are derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedLine {
    pub selector: LineSelector,
    /// First row of its run (no predecessor, or a gap of 2+ before it)
    pub is_first_of_group: bool,
    /// Last row of its run (no successor, or a gap of 2+ after it)
    pub is_last_of_group: bool,
    /// Final row of the whole ordered selection
    pub is_last: bool,
}

/// Order a set of selected line keys and mark contiguous runs.
///
/// Keys that fail to decode are dropped with a warning; a foreign or
/// malformed key must never take down the rest of the selection. Output is
/// ascending by row index, which is also the order used for copy-text
/// concatenation.
pub fn group_selected<'a, I>(keys: I) -> Vec<SelectedLine>
where
    I: IntoIterator<Item = &'a LineKey>,
{
    let mut selectors: Vec<LineSelector> = keys
        .into_iter()
        .filter_map(|key| match decode_line_key(key.as_str()) {
            Ok(selector) => Some(selector),
            Err(err) => {
                log::warn!("dropping undecodable selection key: {err}");
                None
            }
        })
        .collect();

    if selectors.is_empty() {
        return Vec::new();
    }
    if let [only] = selectors[..] {
        return vec![SelectedLine {
            selector: only,
            is_first_of_group: true,
            is_last_of_group: true,
            is_last: true,
        }];
    }

    selectors.sort_by_key(|selector| selector.index);

    let last = selectors.len() - 1;
    let mut result = Vec::with_capacity(selectors.len());
    for (i, current) in selectors.iter().enumerate() {
        // Indices are unique within a hunk, so after sorting the difference
        // between neighbours is at least 1; a difference above 1 is a gap.
        let is_first_of_group = i == 0 || current.index - selectors[i - 1].index > 1;
        let is_last_of_group = i == last || selectors[i + 1].index - current.index > 1;

        result.push(SelectedLine {
            selector: *current,
            is_first_of_group,
            is_last_of_group,
            is_last: i == last,
        });
    }
    result
}
