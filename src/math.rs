//! Small numeric helpers used across the simulation math.

/// Linearly remap `value` from the range `[start_in, stop_in]` to the range
/// `[start_out, stop_out]`.
///
/// Values outside the input range extrapolate; callers that want clamping
/// compose with [`f32::clamp`]. A degenerate input range (zero span) maps
/// everything to `start_out` rather than dividing by zero.
///
/// # Example
///
/// ```ignore
/// use flit::math::remap;
///
/// assert_eq!(remap(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
/// ```
#[inline]
pub fn remap(value: f32, start_in: f32, stop_in: f32, start_out: f32, stop_out: f32) -> f32 {
    let span = stop_in - start_in;
    if span == 0.0 {
        return start_out;
    }
    start_out + (value - start_in) / span * (stop_out - start_out)
}
