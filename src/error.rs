use thiserror::Error;

/// Faults reported by entry validation. All of them abort the whole call
/// before any per-element work; there are no partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("length mismatch: pt has {pt_len} entries, score has {score_len}")]
    LengthMismatch { pt_len: usize, score_len: usize },
    #[error("working-point table misaligned: {bins_len} bin edges, {cuts_len} score cuts")]
    TableLengthMismatch { bins_len: usize, cuts_len: usize },
    #[error("bin edges not ascending at index {index}")]
    UnsortedBins { index: usize },
}
