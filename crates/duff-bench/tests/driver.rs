//! End-to-end driver runs on small configs.

use duff_bench::{run, time_variant, BenchConfig, BenchError, Buffers, ConfigError};
use duff_kernels::Variant;
use duff_test_utils::fixtures;

#[test]
fn run_times_all_variants_in_order() {
    let mut streamed = Vec::new();
    let report = run(&BenchConfig::new(1_003, 5), |s| streamed.push(s.variant)).unwrap();

    let order: Vec<Variant> = report.samples().iter().map(|s| s.variant).collect();
    assert_eq!(order, Variant::ALL.to_vec());
    assert_eq!(streamed, Variant::ALL.to_vec());
    assert!(report.samples().iter().all(|s| s.repeats == 5));
}

#[test]
fn sample_lines_follow_label_time_format() {
    let report = run(&BenchConfig::new(64, 2), |_| {}).unwrap();
    let text = report.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);

    for (line, variant) in lines.iter().zip(Variant::ALL) {
        let prefix = format!("{} time: ", variant.label());
        let rest = line.strip_prefix(&prefix).unwrap();
        let secs = rest.strip_suffix('s').unwrap();
        let secs: f64 = secs.parse().unwrap();
        assert!(secs >= 0.0);
    }
}

#[test]
fn empty_buffers_run_cleanly() {
    let report = run(&BenchConfig::new(0, 3), |_| {}).unwrap();
    assert_eq!(report.samples().len(), 3);
}

#[test]
fn zero_repeats_is_a_config_error() {
    let err = run(&BenchConfig::new(16, 0), |_| {}).unwrap_err();
    assert_eq!(err, BenchError::Config(ConfigError::ZeroRepeats));
}

#[test]
fn sixteen_ones_become_twos_for_every_variant() {
    let mut buffers = Buffers::from_source(fixtures::filled(16, 1));
    for variant in Variant::ALL {
        time_variant(variant.kernel(), &mut buffers, 1).unwrap();
        assert_eq!(buffers.destination(), fixtures::filled(16, 2).as_slice());
    }
}

#[test]
fn single_element_for_every_variant() {
    let mut buffers = Buffers::from_source(vec![5]);
    for variant in Variant::ALL {
        time_variant(variant.kernel(), &mut buffers, 1).unwrap();
        assert_eq!(buffers.destination(), &[6]);
    }
}

#[test]
fn boundary_lengths_verify_for_every_variant() {
    for &len in fixtures::REMAINDER_LENGTHS.iter().filter(|&&l| l < 1_000) {
        let mut buffers = Buffers::from_source(fixtures::ramp(len));
        for variant in Variant::ALL {
            time_variant(variant.kernel(), &mut buffers, 2).unwrap();
        }
    }
}
