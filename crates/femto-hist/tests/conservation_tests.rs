//! Conservation and consistency properties over randomized histograms.

use approx::assert_relative_eq;
use femto_hist::{Axis, Histogram};
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Poisson};

fn random_3d(seed: u64, n: usize) -> Histogram {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let pois = Poisson::new(50.0).unwrap();
    let axes = vec![
        Axis::uniform(n, -0.5, 0.5).unwrap(),
        Axis::uniform(n, -0.5, 0.5).unwrap(),
        Axis::uniform(n, -0.5, 0.5).unwrap(),
    ];
    let data = (0..n * n * n).map(|_| pois.sample(&mut rng)).collect();
    Histogram::from_contents(axes, data).unwrap()
}

#[test]
fn projection_onto_each_axis_conserves_counts() {
    let hist = random_3d(7, 12);
    let total = hist.total();
    for keep in 0..3 {
        let projected = hist.project(keep, &[None, None, None]).unwrap();
        assert_relative_eq!(projected.iter().sum::<f64>(), total, max_relative = 1e-12);
    }
}

#[test]
fn self_division_is_unity_where_nonzero() {
    let hist = random_3d(11, 8);
    let ratio = hist.divide(&hist).unwrap();
    for (r, d) in ratio.data().iter().zip(hist.data()) {
        if *d != 0.0 {
            assert_relative_eq!(*r, 1.0);
        } else {
            assert_eq!(*r, 0.0);
        }
    }
}

#[test]
fn quotient_errors_match_formula() {
    let num = random_3d(3, 6);
    let den = random_3d(5, 6);
    let ratio = num.divide(&den).unwrap();
    for i in 0..num.data().len() {
        let (a, ea) = (num.data()[i], num.errors()[i]);
        let (b, eb) = (den.data()[i], den.errors()[i]);
        if b == 0.0 {
            assert_eq!(ratio.data()[i], 0.0);
            assert_eq!(ratio.errors()[i], 0.0);
            continue;
        }
        let expected = ((ea / b).powi(2) + (a * eb / (b * b)).powi(2)).sqrt();
        assert_relative_eq!(ratio.errors()[i], expected, max_relative = 1e-12);
    }
}

#[test]
fn rebin_conserves_total_over_random_factors() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(19);
    let axis = Axis::uniform(60, 0.0, 3.0).unwrap();
    let data: Vec<f64> = (0..60).map(|_| rng.gen_range(0.0..100.0)).collect();
    let hist = Histogram::from_contents(vec![axis], data).unwrap();

    for k in [2, 3, 5, 6] {
        let rebinned = hist.rebin(k).unwrap();
        assert_eq!(rebinned.axis(0).bin_count(), 60 / k);
        assert_relative_eq!(rebinned.total(), hist.total(), max_relative = 1e-12);
    }
}
