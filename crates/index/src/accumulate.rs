//! Rolling-window accumulation of the input series.

/// Trailing-window sums at the given accumulation scale.
///
/// The output has the same length as the input. Position `t` holds the sum
/// of `values[t - scale + 1 ..= t]` when all `scale` source values are
/// finite; otherwise it is NaN. The first `scale - 1` positions are always
/// NaN (insufficient history), and a single missing source value poisons
/// every window that contains it — no partial sums.
///
/// Runs in O(n) with a running total that subtracts the element leaving the
/// window, rather than re-summing each window.
pub(crate) fn accumulate(values: &[f64], scale: usize) -> Vec<f64> {
    let n = values.len();
    let mut out = vec![f64::NAN; n];

    let mut window_sum = 0.0;
    let mut missing_in_window = 0usize;

    for t in 0..n {
        if values[t].is_finite() {
            window_sum += values[t];
        } else {
            missing_in_window += 1;
        }

        if t >= scale {
            let leaving = values[t - scale];
            if leaving.is_finite() {
                window_sum -= leaving;
            } else {
                missing_in_window -= 1;
            }
        }

        if t + 1 >= scale && missing_in_window == 0 {
            out[t] = window_sum;
        }
    }

    out
}
