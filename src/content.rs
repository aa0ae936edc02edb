//! Content-source rows and the clipboard boundary.
//!
//! The rendering layer exposes a hunk's text as sections of rows; copy looks
//! selected lines up against those rows by their `(before, after)` line
//! number pair. The clipboard itself sits behind the [`Clipboard`] trait so
//! the copy path stays testable; the production sink is [`SystemClipboard`].

use std::num::NonZeroU32;

/// One rendered diff row as exposed by the content source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLine {
    /// Line number in the pre-image, if the row exists there
    pub before_line_number: Option<NonZeroU32>,
    /// Line number in the post-image, if the row exists there
    pub after_line_number: Option<NonZeroU32>,
    /// The row's text content, without a trailing newline
    pub content: String,
}

/// A block of rendered rows within a hunk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentSection {
    pub lines: Vec<SectionLine>,
}

/// Destination for copied text.
///
/// Writes are fire-and-forget: a sink reports or swallows its own failures,
/// and callers never see one as an error.
pub trait Clipboard {
    fn set_text(&mut self, text: &str);
}

/// System clipboard backed by `arboard`.
///
/// Failures (no display server, denied access, write error) are logged at
/// `warn` and otherwise ignored.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(err) = clipboard.set_text(text.to_string()) {
                    log::warn!("clipboard write failed: {err}");
                }
            }
            Err(err) => log::warn!("clipboard unavailable: {err}"),
        }
    }
}
