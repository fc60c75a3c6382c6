//! Inverse-CDF sampling over an outcome table.

use tracing::trace;

use super::random::RandomSource;
use crate::core::distribution::OutcomeTable;
use crate::core::types::Multiple;

/// Draw one outcome multiple from `table`.
///
/// Walks the entries in order, accumulating probability, and returns the
/// multiple of the first entry whose running sum reaches the draw. When
/// rounding leaves the final sum just short of the draw, the last entry is
/// returned. An empty table yields 0.0; validated tables are never empty.
pub fn sample<R: RandomSource + ?Sized>(table: &OutcomeTable, rng: &mut R) -> Multiple {
    let r = rng.next_f64();
    sample_at(table, r)
}

/// Select the outcome for a given uniform draw `r`.
pub fn sample_at(table: &OutcomeTable, r: f64) -> Multiple {
    let mut prob_sum = 0.0;
    for outcome in table.outcomes() {
        prob_sum += outcome.probability;
        if prob_sum >= r {
            return outcome.multiple;
        }
    }

    let fallback = table.last().map(|o| o.multiple).unwrap_or(0.0);
    trace!(
        draw = r,
        cumulative = prob_sum,
        fallback,
        "draw past cumulative sum, clamping to last outcome"
    );
    fallback
}
