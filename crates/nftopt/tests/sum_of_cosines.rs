//! Convergence on the separable sum-of-cosines benchmark.

use std::f64::consts::{PI, TAU};

use approx::assert_relative_eq;
use nftopt::{IterationEvent, NakanishiFujiiTodo, NftConfig, Optimizer, nakanishi_fujii_todo};
use proptest::prelude::*;

fn sum_of_cosines(x: &[f64]) -> f64 {
    x.iter().map(|v| v.cos()).sum()
}

fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    let step = (stop - start) / (num - 1) as f64;
    (0..num).map(|i| start + step * i as f64).collect()
}

#[test]
fn test_every_coordinate_reaches_pi() {
    let params = linspace(0.0, TAU, 100);

    let result = NakanishiFujiiTodo::new()
        .with_max_evaluations(200)
        .with_reset_interval(-1)
        .minimize(sum_of_cosines, params)
        .unwrap();

    assert_eq!(result.nit, 100);
    assert_eq!(result.nfev, 201);
    assert!(result.success);
    for value in &result.x {
        assert_relative_eq!(value.rem_euclid(TAU), PI, epsilon = 1e-8);
    }
    assert_relative_eq!(result.fun.unwrap(), -100.0, epsilon = 1e-8);
}

#[test]
fn test_callback_receives_updated_point() {
    let params = linspace(0.0, TAU, 10);
    let config = NftConfig {
        max_evaluations: 21,
        reset_interval: -1,
        ..NftConfig::default()
    };

    let mut history: Vec<f64> = Vec::new();
    let observer = |event: &IterationEvent<'_>| history.push(sum_of_cosines(event.params));

    let result = nakanishi_fujii_todo(sum_of_cosines, params, &config, observer).unwrap();

    assert_eq!(history.len(), result.nit);
    assert!(history.windows(2).all(|w| w[1] <= w[0] + 1e-12));
    assert_relative_eq!(*history.last().unwrap(), -10.0, epsilon = 1e-8);
}

#[test]
fn test_resets_keep_convergence() {
    let params = linspace(-1.0, 2.0, 7);

    let result = NakanishiFujiiTodo::new()
        .with_max_evaluations(100)
        .with_reset_interval(3)
        .minimize(sum_of_cosines, params)
        .unwrap();

    for value in &result.x {
        assert_relative_eq!(value.rem_euclid(TAU), PI, epsilon = 1e-8);
    }
}

proptest! {
    #[test]
    fn one_sweep_converges_from_any_start(params in prop::collection::vec(-PI..PI, 1..20)) {
        let n = params.len();

        let result = NakanishiFujiiTodo::new()
            .with_max_evaluations(2 * n)
            .with_reset_interval(-1)
            .minimize(sum_of_cosines, params)
            .unwrap();

        prop_assert_eq!(result.nit, n);
        prop_assert_eq!(result.nfev, 2 * n + 1);
        for value in &result.x {
            prop_assert!((value.rem_euclid(TAU) - PI).abs() < 1e-8, "x = {:?}", result.x);
        }
    }
}
