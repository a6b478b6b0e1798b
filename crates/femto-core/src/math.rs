//! Small numeric helpers shared across the workspace

/// Sum values in quadrature: `sqrt(sum(x_i^2))`.
///
/// This is the correct way to combine independent statistical errors;
/// summing them directly overestimates the combined uncertainty.
pub fn quadrature_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .map(|v| v * v)
        .sum::<f64>()
        .sqrt()
}

/// Greatest common divisor (Euclid).
pub fn gcd(a: usize, b: usize) -> usize {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Least common multiple. Returns 0 when either argument is 0.
pub fn lcm(a: usize, b: usize) -> usize {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}
