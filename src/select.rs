use tracing::debug;

use crate::error::SelectError;
use crate::mask::wp_mask;
use crate::table::WorkingPoints;

/// One event's index-aligned object columns.
#[derive(Debug, Clone, PartialEq)]
pub struct EventColumns {
    pub pt: Vec<f32>,
    pub score: Vec<f32>,
}

/// Surviving objects of a single collection after masking.
#[derive(Debug, Clone, PartialEq)]
pub struct Selected {
    pub pt: Vec<f32>,
    pub score: Vec<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApplyStats {
    pub events_in: usize,
    pub events_kept: usize,
    pub objects_in: usize,
    pub objects_kept: usize,
}

/// Keep the objects of one collection that pass their working point,
/// preserving positional order.
pub fn select_objects(
    pt: &[f32],
    score: &[f32],
    wp: &WorkingPoints,
) -> Result<Selected, SelectError> {
    let mask = wp_mask(pt, score, wp)?;
    let mut out = Selected {
        pt: Vec::with_capacity(pt.len()),
        score: Vec::with_capacity(score.len()),
    };
    for i in 0..mask.len() {
        if mask[i] {
            out.pt.push(pt[i]);
            out.score.push(score[i]);
        }
    }
    Ok(out)
}

/// Apply a working-point table to every event: filter each event's columns by
/// its own mask and drop events left with no surviving objects.
///
/// Validation is all-or-nothing: the table and every event are checked before
/// any event is mutated, so a malformed batch is returned untouched.
pub fn apply_working_points(
    events: &mut Vec<EventColumns>,
    wp: &WorkingPoints,
) -> Result<ApplyStats, SelectError> {
    wp.ensure_aligned()?;
    #[cfg(debug_assertions)]
    wp.ensure_sorted()?;
    for event in events.iter() {
        if event.pt.len() != event.score.len() {
            return Err(SelectError::LengthMismatch {
                pt_len: event.pt.len(),
                score_len: event.score.len(),
            });
        }
    }

    let mut stats = ApplyStats {
        events_in: events.len(),
        ..ApplyStats::default()
    };
    for event in events.iter_mut() {
        stats.objects_in += event.pt.len();
        let selected = select_objects(&event.pt, &event.score, wp)?;
        stats.objects_kept += selected.pt.len();
        event.pt = selected.pt;
        event.score = selected.score;
    }
    events.retain(|e| !e.pt.is_empty());
    stats.events_kept = events.len();

    debug!(
        events_in = stats.events_in,
        events_kept = stats.events_kept,
        objects_in = stats.objects_in,
        objects_kept = stats.objects_kept,
        "applied working points"
    );

    Ok(stats)
}

#[cfg(test)]
#[path = "../tests/src_inline/select.rs"]
mod tests;
