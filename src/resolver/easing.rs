//! Pure easing and interpolation helpers.

/// Clamp a value into `[0, 1]`. NaN maps to 0.
#[inline]
pub fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
///
/// Monotonic on `[0, 1]` with f(0) = 0 and f(1) = 1. Input is clamped first.
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - clamp_unit(t);
    1.0 - inv * inv * inv
}

/// Linear interpolation from `from` to `to` by `t`.
///
/// Evaluated as `from + (to - from) * t` so `t = 1` lands exactly on `to`
/// for the magnitudes used here.
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Normalized position of `value` within `[start, end]`, clamped to `[0, 1]`.
///
/// A degenerate or inverted window collapses to a step at `end`: 0 before
/// it, 1 from it onwards.
#[inline]
pub fn window_progress(value: f64, start: f64, end: f64) -> f64 {
    if end <= start {
        return if value >= end { 1.0 } else { 0.0 };
    }
    clamp_unit((value - start) / (end - start))
}
