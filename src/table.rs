use serde::{Deserialize, Serialize};

use crate::error::SelectError;

/// A momentum-binned working-point table: ascending bin edges paired with the
/// minimum score required in each bin. Edge `j` is the lower bound of bin `j`;
/// an object belongs to the highest bin whose edge it meets or exceeds.
///
/// `pt_bins` must be sorted ascending. [`WorkingPoints::new`] does not check
/// this (it stays a caller precondition, as in the tables this crate models);
/// use [`WorkingPoints::strict`] to reject unsorted tables up front. The two
/// tables must have equal length, which is validated both here and at every
/// classification entry point.
///
/// Cuts do not have to be finite: a cut of `f32::NEG_INFINITY` means the bin
/// applies no score requirement and every object landing in it passes.
///
/// Serializes as the `{"bins": [...], "cuts": [...]}` record shape used for
/// published working points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingPoints {
    #[serde(rename = "bins")]
    pub pt_bins: Vec<f32>,
    #[serde(rename = "cuts")]
    pub score_cuts: Vec<f32>,
}

impl WorkingPoints {
    /// Build a table, rejecting misaligned bin/cut vectors.
    pub fn new(pt_bins: Vec<f32>, score_cuts: Vec<f32>) -> Result<Self, SelectError> {
        let wp = Self {
            pt_bins,
            score_cuts,
        };
        wp.ensure_aligned()?;
        Ok(wp)
    }

    /// Like [`WorkingPoints::new`], but also rejects bin edges that are not
    /// ascending.
    pub fn strict(pt_bins: Vec<f32>, score_cuts: Vec<f32>) -> Result<Self, SelectError> {
        let wp = Self::new(pt_bins, score_cuts)?;
        wp.ensure_sorted()?;
        Ok(wp)
    }

    pub fn len(&self) -> usize {
        self.pt_bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pt_bins.is_empty()
    }

    pub fn ensure_aligned(&self) -> Result<(), SelectError> {
        if self.pt_bins.len() != self.score_cuts.len() {
            return Err(SelectError::TableLengthMismatch {
                bins_len: self.pt_bins.len(),
                cuts_len: self.score_cuts.len(),
            });
        }
        Ok(())
    }

    pub fn ensure_sorted(&self) -> Result<(), SelectError> {
        for i in 1..self.pt_bins.len() {
            if self.pt_bins[i] < self.pt_bins[i - 1] {
                return Err(SelectError::UnsortedBins { index: i });
            }
        }
        Ok(())
    }

    /// Highest bin whose edge `p` meets or exceeds, scanning from the largest
    /// edge down. `None` when `p` is below the lowest edge or the table is
    /// empty.
    pub fn highest_bin(&self, p: f32) -> Option<usize> {
        for j in (0..self.pt_bins.len()).rev() {
            if p >= self.pt_bins[j] {
                return Some(j);
            }
        }
        None
    }

    /// Score cut of the bin `p` falls into. Only the highest matching bin is
    /// ever consulted. Requires an aligned table.
    pub fn cut_for(&self, p: f32) -> Option<f32> {
        self.highest_bin(p).map(|j| self.score_cuts[j])
    }

    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
