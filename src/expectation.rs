//! Expectation of the sum of pairwise minima under random pairing of two arrays.
//!

use ndarray::ArrayView1;
use rayon::prelude::*;

#[cfg_attr(doc, katexit::katexit)]
/// Given x and y of the same length m, computes
/// $$ \frac{1}{m} \sum_{p} \sum_{q} \min(x_p, y_q) $$
/// which is the expectation of $ \sum_{p} \min(x_p, y_{\sigma(p)}) $ when $ \sigma $ is a uniform random permutation.
///
/// Both arrays are sorted, then each value is counted as a minimum as many times as there are values of the
/// other array above it. Values of x are compared with $ \ge $ and values of y with $ > $ so that equal values are
/// counted once. Cost is $ O(m \log m) $.
///
/// An empty input gives NaN (0/0), as the normalization it feeds is then null too.
pub fn min_sum_expectation(x: &ArrayView1<f64>, y: &ArrayView1<f64>) -> f64 {
    assert_eq!(x.len(), y.len(), "expectation needs arrays of same length");
    let m = x.len();
    log::debug!("entering min_sum_expectation, nb values : {}", m);
    //
    let x = sorted(x);
    let y = sorted(y);
    //
    let mut expectation: f64 = 0.;
    // nb values of y greater or equal than current x value, x visited in decreasing order
    let mut above = 0usize;
    for xi in x.iter().rev() {
        while above < m && y[m - 1 - above] >= *xi {
            above += 1;
        }
        expectation += above as f64 * xi;
    }
    // nb values of x strictly greater than current y value
    let mut above = 0usize;
    for yj in y.iter().rev() {
        while above < m && x[m - 1 - above] > *yj {
            above += 1;
        }
        expectation += above as f64 * yj;
    }
    //
    expectation / m as f64
} // end of min_sum_expectation

// values must not be NaN, membership checks ensure it
fn sorted(values: &ArrayView1<f64>) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.par_sort_unstable_by(|a, b| a.total_cmp(b));
    sorted
}

//========================================================================================

#[cfg(test)]
mod tests {

    use super::*;
    use ndarray::{Array1, array};
    use rand::Rng;
    use rand::seq::SliceRandom;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use rand_xoshiro::rand_core::SeedableRng;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    // the O(m^2) double sum
    fn brute_force(x: &ArrayView1<f64>, y: &ArrayView1<f64>) -> f64 {
        let mut sum = 0.;
        for a in x.iter() {
            for b in y.iter() {
                sum += a.min(*b);
            }
        }
        sum / x.len() as f64
    }

    #[test]
    fn small_arrays() {
        log_init_test();
        //
        let ju = array![0.2, 0.5, 0.9];
        let jv = array![0.1, 0.5, 0.8];
        let e = min_sum_expectation(&ju.view(), &jv.view());
        assert!((e - brute_force(&ju.view(), &jv.view())).abs() < 1.0e-12);
        assert!((e - 1.).abs() < 1.0e-12);
    }

    #[test]
    fn ties_counted_once() {
        log_init_test();
        //
        let x = array![1., 0., 1., 0., 0., 1.];
        let y = array![0., 1., 1., 0., 1., 0.];
        // 3 ones against 3 ones
        let e = min_sum_expectation(&x.view(), &y.view());
        assert!((e - 9. / 6.).abs() < 1.0e-12);
        //
        let c = Array1::<f64>::from_elem(5, 0.4);
        let e = min_sum_expectation(&c.view(), &c.view());
        assert!((e - 5. * 0.4).abs() < 1.0e-12);
    }

    #[test]
    fn random_against_brute_force() {
        log_init_test();
        //
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1454691);
        for m in [1, 2, 7, 50, 333] {
            // quantized values to get many ties
            let x = Array1::<f64>::from_shape_fn(m, |_| (rng.random_range(0..10) as f64) / 10.);
            let y = Array1::<f64>::from_shape_fn(m, |_| rng.random::<f64>().min(0.5));
            let e = min_sum_expectation(&x.view(), &y.view());
            let b = brute_force(&x.view(), &y.view());
            log::debug!("m : {}, expectation : {:.5e}, brute force : {:.5e}", m, e, b);
            assert!((e - b).abs() < 1.0e-9 * b.max(1.));
            // order of arguments does not matter
            let e_swap = min_sum_expectation(&y.view(), &x.view());
            assert!((e - e_swap).abs() < 1.0e-9 * b.max(1.));
        }
    }

    // compare with the mean of sum of minima over random shuffles of y
    #[test]
    fn permutation_mean() {
        log_init_test();
        //
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(24391);
        let m = 40;
        let x: Vec<f64> = (0..m).map(|_| rng.random::<f64>()).collect();
        let mut y: Vec<f64> = (0..m).map(|_| rng.random::<f64>()).collect();
        let e = min_sum_expectation(
            &ArrayView1::from(x.as_slice()),
            &ArrayView1::from(y.as_slice()),
        );
        //
        let nb_shuffle = 20000;
        let mut mean = 0.;
        for _ in 0..nb_shuffle {
            y.shuffle(&mut rng);
            mean += x.iter().zip(y.iter()).map(|(a, b)| a.min(*b)).sum::<f64>();
        }
        mean /= nb_shuffle as f64;
        log::info!("closed form : {:.5e}, permutation mean : {:.5e}", e, mean);
        assert!((e - mean).abs() < 0.02 * e);
    }

    #[test]
    fn empty_is_nan() {
        let x = Array1::<f64>::zeros(0);
        assert!(min_sum_expectation(&x.view(), &x.view()).is_nan());
    }

    #[test]
    #[should_panic]
    fn unequal_lengths() {
        let x = array![0.1, 0.2];
        let y = array![0.1];
        min_sum_expectation(&x.view(), &y.view());
    }
} // end of mod tests
