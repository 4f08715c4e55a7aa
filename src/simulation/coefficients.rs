use rand::RngExt;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Largest pole magnitude produced by `random_stable_coefficients`
const MAX_POLE_MAGNITUDE: f64 = 0.9;

/// Denominator of a cascade of one-pole sections, `prod (1 - p z^-1)`
///
/// With every `|p| < 1` the resulting filter is stable.
pub fn one_pole_cascade(poles: &[f64]) -> Vec<f64> {
    let mut a = vec![1.0];
    for &pole in poles {
        let mut next = vec![0.0; a.len() + 1];
        for (i, &coeff) in a.iter().enumerate() {
            next[i] += coeff;
            next[i + 1] -= pole * coeff;
        }
        a = next;
    }
    a
}

/// Random stable `(b, a)` pair with `order` poles and `order + 1` zeros
///
/// Poles are real with magnitude below 0.9; numerator taps lie in [-1, 1).
/// The denominator is scaled by a random leading coefficient so callers
/// exercise normalization.
pub fn random_stable_coefficients(order: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let poles: Vec<f64> = (0..order)
        .map(|_| (rng.random::<f64>() * 2.0 - 1.0) * MAX_POLE_MAGNITUDE)
        .collect();
    let gain = 0.5 + rng.random::<f64>() * 2.0;

    let a: Vec<f64> = one_pole_cascade(&poles)
        .into_iter()
        .map(|c| c * gain)
        .collect();
    let b: Vec<f64> = (0..=order)
        .map(|_| (rng.random::<f64>() * 2.0 - 1.0) * gain)
        .collect();

    (b, a)
}
