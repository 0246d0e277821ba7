use tracing::debug;

use crate::error::SelectError;
use crate::table::WorkingPoints;

/// Compute the working-point pass mask for a pair of index-aligned columns.
///
/// Entry `i` passes iff `score[i]` meets the cut of the highest bin whose edge
/// `pt[i]` meets or exceeds. Entries below the lowest bin edge fail, and an
/// empty table yields an all-false mask. The output has the same length and
/// ordering as the inputs.
///
/// The matched bin is final: a failing score is never retried against lower
/// bins. Ascending `pt_bins` is a caller precondition; debug builds reject
/// unsorted tables with [`SelectError::UnsortedBins`].
pub fn wp_mask(pt: &[f32], score: &[f32], wp: &WorkingPoints) -> Result<Vec<bool>, SelectError> {
    if pt.len() != score.len() {
        return Err(SelectError::LengthMismatch {
            pt_len: pt.len(),
            score_len: score.len(),
        });
    }
    wp.ensure_aligned()?;
    #[cfg(debug_assertions)]
    wp.ensure_sorted()?;

    let mut mask = vec![false; pt.len()];
    if wp.is_empty() {
        debug!(
            n_entries = pt.len(),
            "empty working-point table; mask is all-false"
        );
        return Ok(mask);
    }

    for i in 0..pt.len() {
        if let Some(cut) = wp.cut_for(pt[i]) {
            mask[i] = score[i] >= cut;
        }
    }

    Ok(mask)
}

/// Fraction of entries that passed; 0.0 for an empty mask.
pub fn pass_fraction(mask: &[bool]) -> f32 {
    if mask.is_empty() {
        return 0.0;
    }
    let mut count = 0usize;
    for &v in mask {
        if v {
            count += 1;
        }
    }
    count as f32 / mask.len() as f32
}

#[cfg(test)]
#[path = "../tests/src_inline/mask.rs"]
mod tests;
