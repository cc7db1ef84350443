//! Sampling helpers shared by the default policies and experiment
//! drivers.

use rand::Rng;

/// Bernoulli trial: true with probability `weight`.
pub fn coin_toss<R: Rng>(rng: &mut R, weight: f64) -> bool {
    rng.random::<f64>() < weight
}

/// Standard normal sample via the Box–Muller transform.
pub fn std_normal<R: Rng>(rng: &mut R) -> f64 {
    let u: f64 = rng.random::<f64>().max(1e-300); // avoid ln(0)
    let v: f64 = rng.random();
    (-2.0 * u.ln()).sqrt() * (2.0 * std::f64::consts::PI * v).cos()
}

/// Normal sample with the given mean and standard deviation.
pub fn normal<R: Rng>(rng: &mut R, mean: f64, std: f64) -> f64 {
    std_normal(rng) * std + mean
}

/// Sample from a truncated exponential distribution over `[0, max]`.
///
/// `slope` controls how strongly mass concentrates near 0; the default
/// key sampler uses 25.
pub fn exponential<R: Rng>(rng: &mut R, max: f64, slope: f64) -> f64 {
    let u: f64 = rng.random();
    max * (1.0 - (1.0 - slope.exp()) * u).ln() / slope
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn coin_toss_degenerate_weights() {
        let mut rng = rng();
        for _ in 0..100 {
            assert!(!coin_toss(&mut rng, 0.0));
            assert!(coin_toss(&mut rng, 1.0));
        }
    }

    #[test]
    fn exponential_stays_in_range() {
        let mut rng = rng();
        for _ in 0..10_000 {
            let x = exponential(&mut rng, 50_000.0, 25.0);
            assert!((0.0..=50_000.0).contains(&x), "sample {x} out of range");
        }
    }

    #[test]
    fn exponential_concentrates_near_zero() {
        let mut rng = rng();
        let n = 10_000;
        let below = (0..n)
            .filter(|_| exponential(&mut rng, 1.0, 25.0) < 0.25)
            .count();
        // With slope 25 the bulk of the mass sits well below a quarter
        // of the range.
        assert!(below > n * 9 / 10, "only {below}/{n} samples below 0.25");
    }

    #[test]
    fn normal_mean_is_roughly_right() {
        let mut rng = rng();
        let n = 20_000;
        let sum: f64 = (0..n).map(|_| normal(&mut rng, 150.0, 25.0)).sum();
        let mean = sum / n as f64;
        assert!((mean - 150.0).abs() < 1.0, "sample mean {mean}");
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = rng();
        let mut b = rng();
        for _ in 0..100 {
            assert_eq!(normal(&mut a, 0.0, 1.0), normal(&mut b, 0.0, 1.0));
        }
    }
}
