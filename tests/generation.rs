use wavetab::waveforms::{sawtooth, sine, square, triangle, wastooth};
use wavetab::{
    Polarity, Waveform, WavetableError, generate, generate_bipolar, generate_bipolar_with_phase,
    generate_unipolar, generate_unipolar_with_phase,
};

const TOLERANCE: f64 = 1e-9;

fn max(samples: &[f64]) -> f64 {
    samples.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn min(samples: &[f64]) -> f64 {
    samples.iter().copied().fold(f64::INFINITY, f64::min)
}

#[test]
fn test_bipolar_triangle_spans_depth() {
    let table = generate_bipolar(triangle, 16, 15.0).unwrap();
    assert_eq!(table.len(), 16);
    assert!((max(&table) - 15.0).abs() < TOLERANCE);
    assert!((min(&table) + 15.0).abs() < TOLERANCE);
}

#[test]
fn test_unipolar_wastooth_in_range() {
    let table = generate_unipolar(wastooth, 32, 64.0).unwrap();
    assert_eq!(table.len(), 32);
    assert!(table.iter().all(|&s| (0.0..=64.0).contains(&s)));
    assert_eq!(table[0], 64.0);
    assert_eq!(table[31], 2.0);
}

#[test]
fn test_every_waveform_stays_in_range() {
    for waveform in Waveform::ALL {
        for phase in [0.0, 45.0, 90.0, 180.0, 359.0, 720.0, -90.0] {
            let bipolar = generate_bipolar_with_phase(waveform.function(), 64, 100.0, phase).unwrap();
            assert!(
                bipolar.iter().all(|&s| (-100.0..=100.0).contains(&s)),
                "{} bipolar out of range at {} deg",
                waveform,
                phase
            );

            let unipolar =
                generate_unipolar_with_phase(waveform.function(), 64, 100.0, phase).unwrap();
            assert!(
                unipolar.iter().all(|&s| (0.0..=100.0).contains(&s)),
                "{} unipolar out of range at {} deg",
                waveform,
                phase
            );
        }
    }
}

#[test]
fn test_length_invariant() {
    for n in [0, 1, 2, 3, 7, 16, 100, 1024] {
        for waveform in Waveform::ALL {
            assert_eq!(generate_bipolar(waveform.function(), n, 1.0).unwrap().len(), n);
            assert_eq!(generate_unipolar(waveform.function(), n, 1.0).unwrap().len(), n);
        }
    }
}

#[test]
fn test_generation_is_idempotent() {
    for waveform in Waveform::ALL {
        let a = generate_bipolar_with_phase(waveform.function(), 37, 12.5, 33.0).unwrap();
        let b = generate_bipolar_with_phase(waveform.function(), 37, 12.5, 33.0).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_index_zero_is_phase_offset() {
    let table = generate_bipolar_with_phase(sine, 10, 1.0, 90.0).unwrap();
    assert!((table[0] - 1.0).abs() < TOLERANCE);

    let table = generate_bipolar_with_phase(square, 10, 1.0, 180.0).unwrap();
    assert_eq!(table[0], -1.0);
}

#[test]
fn test_unipolar_is_shifted_bipolar() {
    let bipolar = generate_bipolar(sawtooth, 20, 1.0).unwrap();
    let unipolar = generate_unipolar(sawtooth, 20, 2.0).unwrap();
    for (b, u) in bipolar.iter().zip(&unipolar) {
        assert!((b + 1.0 - u).abs() < TOLERANCE);
    }
}

#[test]
fn test_generic_dispatch_matches_entry_points() {
    let via_generate = generate(Polarity::Unipolar, triangle, 12, 9.0, 30.0).unwrap();
    let via_entry = generate_unipolar_with_phase(triangle, 12, 9.0, 30.0).unwrap();
    assert_eq!(via_generate, via_entry);
}

#[test]
fn test_custom_waveform_closure() {
    let gain = 0.5;
    let table = generate_bipolar(|p: f64| sine(p) * gain, 4, 10.0).unwrap();
    assert!((table[1] - 5.0).abs() < TOLERANCE);
}

#[test]
fn test_non_finite_waveform_is_reported() {
    let result = generate_bipolar(|p: f64| 1.0 / (p - 0.25), 4, 1.0);
    match result {
        Err(WavetableError::NonFinite {
            index: Some(1),
            value,
        }) => assert!(value.is_infinite()),
        other => panic!("expected a non-finite sample error, got {:?}", other),
    }
}
