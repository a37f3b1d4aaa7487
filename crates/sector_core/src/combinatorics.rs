//! Binomial coefficients extended to real arguments via the gamma function.

use statrs::function::gamma::ln_gamma;

/// `C(n, k) = Γ(n+1) / (Γ(k+1)·Γ(n−k+1))`, evaluated in log space so
/// sector-sized arguments never overflow.
///
/// Real-valued `n` is allowed (expected slot counts are fractional).
/// Returns 0 outside `0 ≤ k ≤ n`.
pub fn binomial(n: f64, k: f64) -> f64 {
    if k < 0.0 || k > n {
        return 0.0;
    }
    (ln_gamma(n + 1.0) - ln_gamma(k + 1.0) - ln_gamma(n - k + 1.0)).exp()
}

/// Integer convenience over [`binomial`]. Negative `k` yields 0.
pub fn choose(n: u32, k: i64) -> f64 {
    binomial(f64::from(n), k as f64)
}
