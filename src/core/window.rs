use std::ops::Range;

use crate::core::ballistics::Trajectory;

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;
const MIN_SPAN_M: f64 = 1.0;

fn padded_range(min: f64, max: f64, padding_ratio: f64) -> Range<f64> {
    // The origin always stays in view; a bound sitting on it is not padded.
    let lo = min.min(0.0);
    let mut hi = max.max(0.0);
    if hi - lo < MIN_SPAN_M {
        hi = lo + MIN_SPAN_M;
    }

    let pad = (hi - lo) * padding_ratio;
    let lo = if lo < 0.0 { lo - pad } else { lo };
    let hi = if hi > 0.0 { hi + pad } else { hi };
    lo..hi
}

fn bounds(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

fn is_finite_range(range: &Range<f64>) -> bool {
    range.start.is_finite() && range.end.is_finite() && (range.end - range.start).is_finite()
}

/// Chart ranges covering every finite sample plus the origin, with a little headroom.
///
/// `None` when the samples overflow so far that no finite window holds them.
pub fn axis_ranges(trajectory: &Trajectory) -> Option<(Range<f64>, Range<f64>)> {
    let (x_min, x_max) = bounds(trajectory.x_coordinates());
    let (y_min, y_max) = bounds(trajectory.y_coordinates());
    let x_range = padded_range(x_min, x_max, X_PADDING_RATIO);
    let y_range = padded_range(y_min, y_max, Y_PADDING_RATIO);

    (is_finite_range(&x_range) && is_finite_range(&y_range)).then_some((x_range, y_range))
}
