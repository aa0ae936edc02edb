//! Encoding and decoding of opaque selection keys.
//!
//! Selected lines are stored as encoded string keys rather than structured
//! values, so the selection set can rely on plain string equality and
//! hashing. Two key kinds exist:
//!
//! - Line keys: `INDEX:OLD:NEW`, identifying one physical row of a rendered
//!   hunk. `INDEX` is the row's zero-based position in the hunk's flattened
//!   line list; `OLD`/`NEW` are 1-based line numbers in the pre-/post-image,
//!   written as `-` on the side where the row does not exist.
//! - Hunk keys: `FILE@HUNK`, scoping a selection to one hunk of one file.
//!   Decoding splits on the last `@`, so file names containing `@` are safe.
//!
//! Both encodings round-trip: decoding an encoded key always yields the
//! original value.
//!
//! # Examples
//!
//! ```
//! use diff_select::key::{decode_line_key, encode_line_key, LineSelector};
//! use std::num::NonZeroU32;
//!
//! let selector = LineSelector {
//!     index: 3,
//!     old_line: None,
//!     new_line: NonZeroU32::new(12),
//! };
//! let key = encode_line_key(&selector);
//! assert_eq!(key.as_str(), "3:-:12");
//! assert_eq!(decode_line_key(key.as_str()).unwrap(), selector);
//! ```

use error_set::error_set;
use std::num::NonZeroU32;

error_set! {
    /// Errors from decoding selection keys
    KeyError := {
        /// Line key does not have exactly three `:`-separated fields
        #[display("Invalid line key '{key}': expected 'index:old:new'")]
        MalformedLineKey { key: String },
        /// A field could not be parsed as an index or 1-based line number
        #[display("Invalid line number '{value}' in key")]
        InvalidLineNumber { value: String },
        /// Hunk key has no `@` separator or an empty file name
        #[display("Invalid hunk key '{key}': expected 'file@hunk'")]
        MalformedHunkKey { key: String },
        /// Hunk index after the last `@` is not a valid integer
        #[display("Invalid hunk index '{value}' in key")]
        InvalidHunkIndex { value: String },
    }
}

/// One physical row in a rendered diff hunk.
///
/// `index` uniquely identifies the row within the hunk, so it is the only
/// ordering key. A pure insertion has no `old_line`; a pure deletion has no
/// `new_line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSelector {
    /// Zero-based position in the hunk's flattened line list
    pub index: u32,
    /// Line number in the pre-image, if the row exists there
    pub old_line: Option<NonZeroU32>,
    /// Line number in the post-image, if the row exists there
    pub new_line: Option<NonZeroU32>,
}

/// Opaque key for one selected line within a hunk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey(pub(crate) String);

impl LineKey {
    /// The encoded `INDEX:OLD:NEW` form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Opaque key for the `(file, hunk)` pair a selection is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HunkKey(String);

impl HunkKey {
    /// The encoded `FILE@HUNK` form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Encode a line selector into its opaque key.
pub fn encode_line_key(selector: &LineSelector) -> LineKey {
    LineKey(format!(
        "{}:{}:{}",
        selector.index,
        encode_side(selector.old_line),
        encode_side(selector.new_line),
    ))
}

/// Decode a line key back into a structured selector.
///
/// # Errors
///
/// Returns [`KeyError`] if the key does not have exactly three fields or a
/// field is not a valid number. Line numbers must be non-zero; `0` is
/// rejected the same way as non-numeric input.
pub fn decode_line_key(key: &str) -> Result<LineSelector, KeyError> {
    let parts: Vec<&str> = key.split(':').collect();
    if parts.len() != 3 {
        return Err(KeyError::MalformedLineKey {
            key: key.to_string(),
        });
    }

    let index = parts[0]
        .parse::<u32>()
        .map_err(|_| KeyError::InvalidLineNumber {
            value: parts[0].to_string(),
        })?;

    Ok(LineSelector {
        index,
        old_line: decode_side(parts[1])?,
        new_line: decode_side(parts[2])?,
    })
}

/// Encode a `(file, hunk)` scope into its opaque key.
pub fn encode_hunk_key(file_name: &str, hunk_index: u32) -> HunkKey {
    HunkKey(format!("{file_name}@{hunk_index}"))
}

/// Decode a hunk key back into its `(file, hunk)` pair.
///
/// # Errors
///
/// Returns [`KeyError`] if the key has no `@` separator, the file name is
/// empty, or the trailing hunk index is not a valid integer.
pub fn decode_hunk_key(key: &str) -> Result<(String, u32), KeyError> {
    let Some((file_name, index_str)) = key.rsplit_once('@') else {
        return Err(KeyError::MalformedHunkKey {
            key: key.to_string(),
        });
    };

    if file_name.is_empty() {
        return Err(KeyError::MalformedHunkKey {
            key: key.to_string(),
        });
    }

    let hunk_index = index_str
        .parse::<u32>()
        .map_err(|_| KeyError::InvalidHunkIndex {
            value: index_str.to_string(),
        })?;

    Ok((file_name.to_string(), hunk_index))
}

/// Format one side of a line key (`-` when the row has no line there)
fn encode_side(line: Option<NonZeroU32>) -> String {
    match line {
        Some(n) => n.to_string(),
        None => "-".to_string(),
    }
}

/// Parse one side of a line key (`-` means absent)
fn decode_side(input: &str) -> Result<Option<NonZeroU32>, KeyError> {
    if input == "-" {
        return Ok(None);
    }
    input
        .parse::<NonZeroU32>()
        .map(Some)
        .map_err(|_| KeyError::InvalidLineNumber {
            value: input.to_string(),
        })
}
