//! End-to-end properties of kernel design and FFT filtering

use approx::assert_abs_diff_eq;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use sinc_filter::filters::{design_fir, design_highpass_fir, design_lowpass_fir};
use sinc_filter::spectrum::ComplexFftTransform;
use sinc_filter::{apply, design, FilterApplicator, FilterError, FilterKind, FilterSpec, WindowType};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Map raw quickcheck input onto a valid (fc, b, window) triple
fn spec_params(fc_seed: u16, b_seed: u16, window_seed: u8) -> (f64, f64, WindowType) {
    let fc = 0.001 + (fc_seed % 499) as f64 * 0.001;
    let b = 0.005 + (b_seed % 990) as f64 * 0.0005;
    let window = WindowType::ALL[window_seed as usize % WindowType::ALL.len()];
    (fc, b, window)
}

fn to_signal(raw: &[i16]) -> Vec<f64> {
    raw.iter().map(|&v| v as f64 / 256.0).collect()
}

#[quickcheck]
fn kernel_length_is_odd_and_long_enough(fc_seed: u16, b_seed: u16, window_seed: u8) -> bool {
    let (fc, b, window) = spec_params(fc_seed, b_seed, window_seed);
    let kernel = design_lowpass_fir(fc, b, window).unwrap();

    let n = kernel.len();
    n % 2 == 1 && n as f64 >= (4.0 / b).ceil() && n == kernel.span().len()
}

#[quickcheck]
fn lowpass_has_unit_dc_gain(fc_seed: u16, b_seed: u16, window_seed: u8) -> bool {
    let (fc, b, window) = spec_params(fc_seed, b_seed, window_seed);
    let kernel = design_lowpass_fir(fc, b, window).unwrap();

    (kernel.sum() - 1.0).abs() < 1e-9
}

#[quickcheck]
fn highpass_is_impulse_minus_lowpass(fc_seed: u16, b_seed: u16, window_seed: u8) -> bool {
    let (fc, b, window) = spec_params(fc_seed, b_seed, window_seed);
    let lp = design_lowpass_fir(fc, b, window).unwrap();
    let hp = design_highpass_fir(fc, b, window).unwrap();

    let center = lp.center();
    let exact = lp
        .coefficients()
        .iter()
        .zip(hp.coefficients())
        .enumerate()
        .all(|(i, (&l, &h))| if i == center { h == 1.0 - l } else { h == -l });

    exact && hp.len() == lp.len() && hp.sum().abs() < 1e-9
}

#[quickcheck]
fn design_is_deterministic(fc_seed: u16, b_seed: u16, window_seed: u8, highpass: bool) -> bool {
    let (fc, b, window) = spec_params(fc_seed, b_seed, window_seed);
    let kind = if highpass { FilterKind::HighPass } else { FilterKind::LowPass };
    let spec = FilterSpec::new(fc, b, window, kind).unwrap();

    let first = design_fir(&spec).unwrap();
    let second = design_fir(&spec).unwrap();

    first
        .coefficients()
        .iter()
        .zip(second.coefficients())
        .all(|(a, b)| a.to_bits() == b.to_bits())
}

#[quickcheck]
fn output_length_matches_signal(raw_signal: Vec<i16>, raw_kernel: Vec<i16>) -> TestResult {
    if raw_signal.is_empty() || raw_kernel.is_empty() {
        return TestResult::discard();
    }
    let signal = to_signal(&raw_signal);
    let kernel_len = raw_kernel.len().min(signal.len());
    let kernel = to_signal(&raw_kernel[..kernel_len]);

    let output = apply(&signal, &kernel).unwrap();
    TestResult::from_bool(output.len() == signal.len())
}

#[quickcheck]
fn filtering_is_linear(raw: Vec<(i16, i16)>, a: i8, b: i8) -> TestResult {
    if raw.len() < 5 {
        return TestResult::discard();
    }
    let s1: Vec<f64> = raw.iter().map(|&(x, _)| x as f64 / 256.0).collect();
    let s2: Vec<f64> = raw.iter().map(|&(_, y)| y as f64 / 256.0).collect();
    let (a, b) = (a as f64, b as f64);
    let combined: Vec<f64> = s1.iter().zip(&s2).map(|(x, y)| a * x + b * y).collect();

    let kernel = [0.1, 0.2, 0.4, 0.2, 0.1];
    let mut applicator = FilterApplicator::new();
    let lhs = applicator.apply(&combined, &kernel).unwrap();
    let y1 = applicator.apply(&s1, &kernel).unwrap();
    let y2 = applicator.apply(&s2, &kernel).unwrap();

    let ok = lhs
        .iter()
        .zip(y1.iter().zip(&y2))
        .all(|(l, (p, q))| (l - (a * p + b * q)).abs() < 1e-6);
    TestResult::from_bool(ok)
}

#[test]
fn blackman_lowpass_scenario() {
    init_logger();
    let (span, kernel) = design(0.1, 0.08, "blackman", "lp").unwrap();

    assert_eq!(span, 0..51);
    assert_eq!(kernel.len(), 51);
    assert_abs_diff_eq!(kernel.iter().sum::<f64>(), 1.0, epsilon = 1e-9);
    for i in 0..25 {
        assert_abs_diff_eq!(kernel[i], kernel[50 - i], epsilon = 1e-12);
    }
}

#[test]
fn blackman_highpass_scenario() {
    init_logger();
    let (_, lp) = design(0.1, 0.08, "blackman", "lp").unwrap();
    let (span, hp) = design(0.1, 0.08, "blackman", "hp").unwrap();

    assert_eq!(span.len(), 51);
    assert_eq!(hp[25], 1.0 - lp[25]);
    for i in (0..51).filter(|&i| i != 25) {
        assert_eq!(hp[i], -lp[i]);
    }
}

#[test]
fn unit_impulse_is_identity() {
    let signal: Vec<f64> = (0..257).map(|i| ((i * 7919) % 101) as f64 - 50.0).collect();
    let output = apply(&signal, &[1.0]).unwrap();

    for (a, b) in signal.iter().zip(&output) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
    }
}

#[test]
fn designed_kernel_filters_through_both_backends() {
    init_logger();
    let kernel = design_lowpass_fir(0.05, 0.02, WindowType::Hann).unwrap();
    let signal: Vec<f64> = (0..1024).map(|i| (i as f64 * 0.05).sin() + (i as f64 * 2.5).sin()).collect();

    let fast = apply(&signal, kernel.coefficients()).unwrap();
    let reference = FilterApplicator::with_transform(ComplexFftTransform::new())
        .apply(&signal, kernel.coefficients())
        .unwrap();

    for (a, b) in fast.iter().zip(&reference) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
    }
}

#[test]
fn unknown_window_is_an_error() {
    init_logger();
    let err = design(0.1, 0.08, "foo", "lp").unwrap_err();
    assert_eq!(err, FilterError::UnsupportedWindow("foo".to_string()));
    assert!(err.to_string().contains("foo"));
}

#[test]
fn unknown_kind_is_an_error() {
    let err = design(0.1, 0.08, "none", "bandpass").unwrap_err();
    assert!(matches!(err, FilterError::UnsupportedFilterKind(ref k) if k == "bandpass"));
}

#[test]
fn out_of_range_parameters_are_rejected() {
    assert!(matches!(
        design(0.6, 0.08, "blackman", "lp"),
        Err(FilterError::ParameterOutOfRange { name: "fc", .. })
    ));
    assert!(matches!(
        design(0.1, 0.0, "blackman", "lp"),
        Err(FilterError::ParameterOutOfRange { name: "b", .. })
    ));
}

#[test]
fn kernel_longer_than_signal_is_rejected() {
    let kernel = design_lowpass_fir(0.1, 0.08, WindowType::Blackman).unwrap();
    let signal = vec![0.0; 50];

    assert_eq!(
        apply(&signal, kernel.coefficients()).unwrap_err(),
        FilterError::KernelLongerThanSignal {
            kernel_len: 51,
            signal_len: 50
        }
    );
}

#[test]
fn spec_loads_from_toml() {
    let spec: FilterSpec = toml::from_str(
        r#"
        fc = 0.1
        b = 0.08
        window = "hanning"
        kind = "hp"
        "#,
    )
    .unwrap();

    assert_eq!(spec.window_type(), WindowType::Hann);
    assert_eq!(spec.kind(), FilterKind::HighPass);
    assert_eq!(spec.kernel_length(), 51);

    let text = toml::to_string(&spec).unwrap();
    assert!(text.contains("window = \"hanning\""));
    assert!(text.contains("kind = \"hp\""));
    assert_eq!(toml::from_str::<FilterSpec>(&text).unwrap(), spec);
}

#[test]
fn spec_window_defaults_to_blackman() {
    let spec: FilterSpec = toml::from_str("fc = 0.2\nb = 0.1\nkind = \"lp\"\n").unwrap();
    assert_eq!(spec.window_type(), WindowType::Blackman);
}

#[test]
fn invalid_toml_spec_is_rejected() {
    let err = toml::from_str::<FilterSpec>("fc = 0.1\nb = 0.08\nwindow = \"foo\"\nkind = \"lp\"\n").unwrap_err();
    assert!(err.to_string().contains("foo"));

    let err = toml::from_str::<FilterSpec>("fc = 0.9\nb = 0.08\nkind = \"lp\"\n").unwrap_err();
    assert!(err.to_string().contains("fc"));
}
