//! Decay math shared by QoS scoring and abandonment heuristics.

/// Sigmoid decay of `x` over `[0, max_x]` with sharpness `k`.
///
/// Equals 1 at `x == 0`, equals 0 for all `x >= max_x`, and is
/// monotonically non-increasing in between. `k == 1` is nearly linear;
/// `k >= 10` approaches a step function; `0 < k < 1` drops quickly and
/// then lingers near 0.5.
pub fn sigmoid(x: f64, max_x: f64, k: f64) -> f64 {
    if x >= max_x {
        return 0.0;
    }
    if x == 0.0 {
        return 1.0;
    }
    let y = x / max_x;
    1.0 / (1.0 + (1.0 / y - 1.0).powf(-k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn endpoints() {
        assert_eq!(sigmoid(0.0, 400.0, 3.0), 1.0);
        assert_eq!(sigmoid(400.0, 400.0, 3.0), 0.0);
        assert_eq!(sigmoid(500.0, 400.0, 3.0), 0.0);
    }

    #[test]
    fn midpoint_is_half() {
        let v = sigmoid(200.0, 400.0, 3.0);
        assert!((v - 0.5).abs() < 1e-12, "midpoint was {v}");
    }

    #[test]
    fn sharp_k_approaches_step() {
        assert!(sigmoid(100.0, 400.0, 20.0) > 0.99);
        assert!(sigmoid(300.0, 400.0, 20.0) < 0.01);
    }

    proptest! {
        #[test]
        fn non_increasing(a in 0.0f64..1000.0, b in 0.0f64..1000.0,
                          max_x in 1.0f64..2000.0, k in 0.1f64..20.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(sigmoid(lo, max_x, k) >= sigmoid(hi, max_x, k));
        }

        #[test]
        fn bounded(x in 0.0f64..2000.0, max_x in 1.0f64..2000.0, k in 0.1f64..20.0) {
            let v = sigmoid(x, max_x, k);
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }
}
