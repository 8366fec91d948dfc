/// Builds the uniform time grid for a simulation run.
///
/// Returns `t_k = k * dt` for `k = 0, 1, ...` while `t_k < t_end`, which
/// gives `ceil(t_end / dt)` points. The end time itself is excluded.
///
/// Degenerate inputs (`dt <= 0`, `t_end <= 0`, or NaN in either) return an
/// empty grid rather than failing.
#[must_use]
pub fn time_grid(t_end: f64, dt: f64) -> Vec<f64> {
    if !(dt > 0.0 && t_end > 0.0) {
        return Vec::new();
    }

    // Float division then ceil, so the count agrees with the half-open
    // interval [0, t_end) even when t_end is not a multiple of dt.
    let len = (t_end / dt).ceil() as usize;
    (0..len).map(|k| k as f64 * dt).collect()
}
