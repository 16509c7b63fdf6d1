use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Dataset, DatasetSnapshot};

/// How the renderer should apply an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
    /// Only trailing rows changed; the renderer may extend the existing draw.
    Append,
    /// Shape or content changed; the renderer must redraw from scratch.
    Replace,
}

impl RenderMode {
    #[must_use]
    pub fn from_append_decision(is_append: bool) -> Self {
        if is_append { Self::Append } else { Self::Replace }
    }
}

/// Decides whether `curr` is exactly the previously rendered dataset plus
/// additional trailing rows.
///
/// Checks are ordered cheapest first; row content is only inspected once the
/// shape checks pass. The content check compares the previous dataset's last
/// row against the row at the same index in `curr`, which is the minimal
/// prefix evidence the incremental path relies on.
///
/// Degenerate shapes (zero rows, missing columns) classify as "not an append"
/// rather than erroring.
#[must_use]
pub fn is_append(prev: &DatasetSnapshot, curr: &Dataset) -> bool {
    if curr.column_count() != prev.column_count {
        trace!(
            prev_columns = prev.column_count,
            curr_columns = curr.column_count(),
            "column count changed, not an append"
        );
        return false;
    }

    // Appends must strictly grow; equal counts mean replace even when the
    // content is identical.
    if curr.row_count() <= prev.row_count {
        return false;
    }

    // Empty-to-nonempty has no previous row to diff against, so the first
    // non-empty dataset always takes the full-replace path.
    if prev.row_count == 0 {
        return false;
    }

    match (prev.last_row.as_ref(), curr.row(prev.row_count - 1)) {
        (Some(prev_last), Some(overlap)) => prev_last == overlap,
        _ => false,
    }
}
