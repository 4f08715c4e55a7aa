mod test_signals;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use ltifilter::{ApplyMode, Filter, FilterError, Signal};

use test_signals::{assert_signals_close, random_stable_coefficients, sine, white_noise};

#[test]
fn test_normalization_scales_both_sequences() {
    for seed in 0..20 {
        let (b, a) = random_stable_coefficients(1 + (seed as usize % 6), seed);
        let scale = a[0];
        let filter = Filter::new(b.clone(), a.clone()).unwrap();

        assert_abs_diff_eq!(filter.a()[0], 1.0, epsilon = 1e-9);
        for (normalized, original) in filter.b().iter().zip(&b) {
            assert_relative_eq!(*normalized, original / scale, max_relative = 1e-12);
        }
        for (normalized, original) in filter.a().iter().zip(&a) {
            assert_relative_eq!(*normalized, original / scale, max_relative = 1e-12);
        }
    }
}

#[test]
fn test_zero_leading_coefficient_fails() {
    let result = Filter::new(vec![1.0, 2.0], vec![0.0, 0.5]);
    assert!(matches!(result, Err(FilterError::InvalidCoefficients(_))));
}

#[test]
fn test_failed_reassignment_leaves_filter_usable() {
    let mut filter = Filter::new(vec![1.0], vec![1.0, -0.5]).unwrap();
    let before = filter.apply_direct(&Signal::impulse(8000, 8));

    assert!(matches!(
        filter.set_denominator(vec![0.0, 1.0]),
        Err(FilterError::InvalidCoefficients(_))
    ));

    assert_eq!(filter.a(), &[1.0, -0.5]);
    assert_eq!(filter.b(), &[1.0]);
    assert_eq!(filter.apply_direct(&Signal::impulse(8000, 8)), before);
}

#[test]
fn test_renormalization_on_reassignment() {
    let mut filter = Filter::new(vec![0.3, 0.6, 0.9], vec![1.0, 0.2]).unwrap();
    let new_a = vec![3.0, -1.5, 0.75];
    filter.set_denominator(new_a.clone()).unwrap();

    let expected_b: Vec<f64> = [0.3, 0.6, 0.9].iter().map(|b| b / 3.0).collect();
    let expected_a: Vec<f64> = new_a.iter().map(|a| a / 3.0).collect();
    assert_eq!(filter.b(), expected_b.as_slice());
    assert_eq!(filter.a(), expected_a.as_slice());
}

#[test]
fn test_realizations_agree() {
    for seed in 0..12 {
        let order = 1 + (seed as usize % 6);
        let (b, a) = random_stable_coefficients(order, 100 + seed);
        let filter = Filter::new(b, a).unwrap();
        let signal = white_noise(16000, 2000, 1.0, seed);

        let direct = filter.apply_direct(&signal);
        let linear = filter.apply_linear_buffer(&signal);
        let circular = filter.apply_circular_buffer(&signal);

        assert_signals_close(&linear, &direct, 1e-9);
        assert_signals_close(&circular, &direct, 1e-9);
        assert_signals_close(&circular, &linear, 1e-9);
    }
}

#[test]
fn test_realizations_agree_with_unequal_lengths() {
    // Long numerator, short denominator and the reverse
    let shapes = [
        (vec![0.1; 12], vec![1.0, -0.3]),
        (vec![0.5], vec![1.0, -0.2, 0.05, -0.01, 0.002]),
        (vec![1.0], vec![1.0]),
    ];
    let signal = sine(8000, 500, 440.0, 1.0);

    for (b, a) in shapes {
        let filter = Filter::new(b, a).unwrap();
        let direct = filter.apply_direct(&signal);
        assert_signals_close(&filter.apply_linear_buffer(&signal), &direct, 1e-9);
        assert_signals_close(&filter.apply_circular_buffer(&signal), &direct, 1e-9);
    }
}

#[test]
fn test_identity_filter() {
    let filter = Filter::new(vec![1.0], vec![1.0]).unwrap();
    let signal = white_noise(22050, 256, 0.7, 9);

    for mode in [ApplyMode::Auto, ApplyMode::DifferenceEquation] {
        let output = filter.apply_to(&signal, mode).unwrap();
        assert_eq!(output.sampling_rate(), 22050);
        assert_signals_close(&output, &signal, 1e-15);
    }
    assert_signals_close(&filter.apply_linear_buffer(&signal), &signal, 1e-15);
    assert_signals_close(&filter.apply_circular_buffer(&signal), &signal, 1e-15);
}

#[test]
fn test_one_pole_impulse_response() {
    let filter = Filter::new(vec![1.0], vec![1.0, -0.5]).unwrap();
    let signal = Signal::new(1000, vec![1.0, 0.0, 0.0, 0.0]);
    let expected = [1.0, 0.5, 0.25, 0.125];

    assert_eq!(
        filter.apply_to(&signal, ApplyMode::Auto).unwrap().samples(),
        &expected
    );
    assert_eq!(filter.apply_direct(&signal).samples(), &expected);
    assert_eq!(filter.apply_linear_buffer(&signal).samples(), &expected);
    assert_eq!(filter.apply_circular_buffer(&signal).samples(), &expected);
}

#[test]
fn test_unnormalized_one_pole() {
    // Same filter as above, scaled by 4
    let filter = Filter::new(vec![4.0], vec![4.0, -2.0]).unwrap();
    let output = filter.apply_direct(&Signal::impulse(1000, 4));
    assert_eq!(output.samples(), &[1.0, 0.5, 0.25, 0.125]);
}

#[test]
fn test_input_is_not_modified() {
    let filter = Filter::new(vec![0.5, 0.5], vec![1.0, -0.9]).unwrap();
    let signal = white_noise(8000, 64, 1.0, 3);
    let copy = signal.clone();

    let _ = filter.apply_to(&signal, ApplyMode::Auto).unwrap();
    let _ = filter.apply_linear_buffer(&signal);
    let _ = filter.apply_circular_buffer(&signal);
    assert_eq!(signal, copy);
}

#[test]
fn test_calls_are_independent() {
    // No delay-line state carries over between calls
    let filter = Filter::new(vec![1.0], vec![1.0, -0.9]).unwrap();
    let signal = Signal::impulse(8000, 16);
    let first = filter.apply_circular_buffer(&signal);
    let second = filter.apply_circular_buffer(&signal);
    assert_eq!(first, second);
}

#[test]
fn test_impulse_response_matches_filtering() {
    let filter = Filter::with_impulse_response_length(vec![0.2, 0.3], vec![1.0, -0.7], 32).unwrap();
    let response = filter.impulse_response();
    let filtered = filter.apply_direct(&Signal::impulse(48000, 32));
    assert_eq!(response.as_slice(), filtered.samples());
}

#[test]
fn test_frequency_response_matches_steady_state_gain() {
    let filter = Filter::new(vec![0.1, 0.1], vec![1.0, -0.8]).unwrap();
    let fs = 8000.0;
    let freq = 500.0;

    let expected_gain = filter.frequency_response(&[freq], fs)[0].norm();

    let output = filter.apply_direct(&sine(8000, 8000, freq, 1.0));
    // Whole periods only, after the transient has died out
    let steady = &output.samples()[4000..];
    let rms = (steady.iter().map(|x| x * x).sum::<f64>() / steady.len() as f64).sqrt();

    assert_relative_eq!(rms * 2.0_f64.sqrt(), expected_gain, max_relative = 1e-3);
}
