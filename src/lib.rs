//! Grand Index (GRI) and Adjusted Grand Index (AGRI).
//!
//! These indices compare two clustering solutions of the same objects. The solutions can be
//! exclusive hard, fuzzy/probabilistic, non-exclusive hard or possibilistic, they are given as membership
//! matrices of shape (nb_clusters, nb_objects) with values in \[0,1\].
//!
//! Reference:
//! - Horta D., Campello R. J. G. B. Comparing Hard and Overlapping Clusterings.
//!   Journal of Machine Learning Research, 16: 2949-2997 (2015)
//!   [jmlr](https://jmlr.org/papers/v16/horta15a.html)
//!

use lazy_static::lazy_static;

pub mod prelude;

pub mod error;
pub mod expectation;
pub mod grand;
pub mod information;
pub mod membership;

lazy_static! {
    static ref LOG: u64 = init_log();
}

#[allow(unused)]
// install a logger facility
fn init_log() -> u64 {
    let _res = env_logger::try_init();
    println!("\n ************** initializing logger *****************\n");
    1
}

#[cfg(test)]
mod tests {
    #[test]
    // initialize once log system for tests.
    fn init_log() {
        let _res = env_logger::try_init();
    }
} // end of tests
