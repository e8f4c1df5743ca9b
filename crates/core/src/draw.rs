//! Candidate eligibility and the weighted rarity draw.
//!
//! Candidates arrive already ordered (descending rarity chance, then id) so
//! that the walk over the cumulative weights is reproducible for a given
//! random value. Weights are normalized against the sum over the eligible
//! set only; the global rarity table does not need to sum to 1.

use rand::Rng;

use crate::types::Timestamp;

/// Anything that can take part in a weighted draw.
pub trait Weighted {
    /// Relative weight of this candidate. Negative and non-finite values are
    /// treated as zero.
    fn weight(&self) -> f64;
}

/// Whether an item can currently be obtained from a spin.
///
/// Inactive items never are. Limited items are only while `limited_until`
/// lies strictly in the future; a limited item without an end date is not
/// eligible.
pub fn is_eligible(
    is_active: bool,
    is_limited: bool,
    limited_until: Option<Timestamp>,
    now: Timestamp,
) -> bool {
    is_active && (!is_limited || limited_until.is_some_and(|until| until > now))
}

fn effective_weight<T: Weighted>(candidate: &T) -> f64 {
    let w = candidate.weight();
    if w.is_finite() && w > 0.0 {
        w
    } else {
        0.0
    }
}

/// Sum of effective weights over `candidates`.
pub fn total_weight<T: Weighted>(candidates: &[T]) -> f64 {
    candidates.iter().map(effective_weight).sum()
}

/// Pick the candidate whose cumulative weight band contains `r`.
///
/// Walks `candidates` in order, accumulating weights; the first candidate
/// with positive weight for which `r <= cumulative` wins. If the walk runs
/// off the end (floating-point drift, or `r` at or past the total), the last
/// candidate with positive weight is returned, or the last candidate if none
/// has any. Returns `None` only for an empty slice.
pub fn select<T: Weighted>(candidates: &[T], r: f64) -> Option<&T> {
    let mut cumulative = 0.0;
    for candidate in candidates {
        let w = effective_weight(candidate);
        cumulative += w;
        if w > 0.0 && r <= cumulative {
            return Some(candidate);
        }
    }

    candidates
        .iter()
        .rev()
        .find(|c| effective_weight(*c) > 0.0)
        .or_else(|| candidates.last())
}

/// Draw one candidate with probability proportional to its weight.
///
/// `r` is drawn uniformly from `[0, total_weight)`. When every weight is
/// zero the draw falls back to a uniform pick so that a non-empty candidate
/// set always yields an item.
pub fn draw<'a, T: Weighted, R: Rng + ?Sized>(candidates: &'a [T], rng: &mut R) -> Option<&'a T> {
    if candidates.is_empty() {
        return None;
    }

    let total = total_weight(candidates);
    if total <= 0.0 || !total.is_finite() {
        let idx = rng.random_range(0..candidates.len());
        return candidates.get(idx);
    }

    let r = rng.random_range(0.0..total);
    select(candidates, r)
}
