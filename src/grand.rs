//! Grand Index (GRI) and its chance corrected version (AGRI).
//!
//! The agreement of two clustering solutions is measured pair by pair : both solutions give a joint (same cluster)
//! and a separation (different clusters) degree to each pair of objects, the agreement on a pair is the minimum
//! of the degrees given by each solution.
//!
//! - Horta D., Campello R. J. G. B. Comparing Hard and Overlapping Clusterings. JMLR 16 (2015)
//!

use ndarray::{ArrayView1, ArrayView2, Zip};
use num_traits::Float;

use crate::error::GriError;
use crate::expectation::min_sum_expectation;
use crate::information::PairInformation;
use crate::membership::Membership;

/// Computes GRI, or AGRI if adjusted is true, of two membership matrices of shape (nb_clusters, nb_objects).
///
/// The matrices may have different numbers of clusters but must have the same number of objects, and all their
/// values must be in \[0., 1.\]. These checks are done before any computation.
///
/// A null normalization (less than 2 objects, matrices with only zeros) or an expectation equal to 1. gives a
/// non finite result, it is not reported as an error.
pub fn grand_index<F: Float>(
    u: &ArrayView2<F>,
    v: &ArrayView2<F>,
    adjusted: bool,
) -> Result<f64, GriError> {
    check_shapes(u.ncols(), v.ncols())?;
    let u = Membership::with_name(u, "u")?;
    let v = Membership::with_name(v, "v")?;
    //
    let grand = GrandIndex::new(&u, &v)?;
    if adjusted {
        Ok(grand.get_agri())
    } else {
        Ok(grand.get_gri())
    }
} // end of grand_index

fn check_shapes(u_objects: usize, v_objects: usize) -> Result<(), GriError> {
    if u_objects != v_objects {
        return Err(GriError::ShapeMismatch {
            u_objects,
            v_objects,
        });
    }
    Ok(())
}

//=================================================================================================

#[cfg_attr(doc, katexit::katexit)]
/// Comparison of two clustering solutions U and V.
///
/// With $ J, S $ the joint and separation arrays of each solution (see [PairInformation]) and $ T = J + S $:
/// - $ a = \sum_{p} \min(J^{U}_p, J^{V}_p) $
/// - $ d = \sum_{p} \min(S^{U}_p, S^{V}_p) $
/// - $ T_{max} = \max(\sum_{p} T^{U}_p, \sum_{p} T^{V}_p) $
/// - $ GRI = \frac{a + d}{T_{max}} $
///
/// The adjusted index is $ AGRI = \frac{GRI - E[GRI]}{1 - E[GRI]} $ where the expectation is taken over random
/// pairings of the pair values of U and V, see [min_sum_expectation].
///
/// For exclusive hard clusterings GRI is the Rand index and AGRI the Hubert-Arabie adjusted Rand index.
pub struct GrandIndex {
    u_info: PairInformation,
    v_info: PairInformation,
    // normalization
    tmax: f64,
    // agreement on joint and separation
    a: f64,
    d: f64,
}

impl GrandIndex {
    /// computes pair information of both solutions and GRI. The expectation is computed on request.
    pub fn new(u: &Membership, v: &Membership) -> Result<Self, GriError> {
        check_shapes(u.get_nb_objects(), v.get_nb_objects())?;
        log::debug!(
            "entering GrandIndex::new, nb clusters : ({}, {}), nb objects : {}",
            u.get_nb_clusters(),
            v.get_nb_clusters(),
            u.get_nb_objects()
        );
        let u_info = PairInformation::new(u);
        let v_info = PairInformation::new(v);
        let tmax = u_info.total_information().max(v_info.total_information());
        let (a, d) = agreements(&u_info, &v_info);
        log::debug!("tmax : {:.5e}, a : {:.5e}, d : {:.5e}", tmax, a, d);
        //
        Ok(GrandIndex {
            u_info,
            v_info,
            tmax,
            a,
            d,
        })
    }

    pub fn get_gri(&self) -> f64 {
        (self.a + self.d) / self.tmax
    }

    /// returns expectation of GRI. This is the costly part, O(m log(m)) with m the number of pairs.
    pub fn get_gri_expectation(&self) -> f64 {
        calculate_gri_expectation(&self.u_info, &self.v_info, self.tmax)
    }

    pub fn get_agri(&self) -> f64 {
        adjust(self.get_gri(), self.get_gri_expectation())
    }

    /// returns the normalization constant
    pub fn get_tmax(&self) -> f64 {
        self.tmax
    }

    /// returns (a,d), agreement on joint and on separation information
    pub fn get_agreement(&self) -> (f64, f64) {
        (self.a, self.d)
    }

    pub fn get_nb_pairs(&self) -> usize {
        self.u_info.get_nb_pairs()
    }

    /// logs the quantities computed
    pub fn dump(&self) {
        log::info!(" nb pairs : {}", self.get_nb_pairs());
        log::info!(
            " total information u : {:.3e}, v : {:.3e}",
            self.u_info.total_information(),
            self.v_info.total_information()
        );
        log::info!(" joint agreement : {:.3e}", self.a);
        log::info!(" separation agreement : {:.3e}", self.d);
        log::info!(" gri : {:.5e}", self.get_gri());
    }
} // end of impl GrandIndex

//=================================================================================================

// sum of minima of two arrays of pair values
fn min_sum(x: &ArrayView1<f64>, y: &ArrayView1<f64>) -> f64 {
    Zip::from(x).and(y).fold(0., |acc, a, b| acc + a.min(*b))
}

fn agreements(u_info: &PairInformation, v_info: &PairInformation) -> (f64, f64) {
    assert_eq!(u_info.get_nb_pairs(), v_info.get_nb_pairs());
    let a = min_sum(&u_info.get_joint(), &v_info.get_joint());
    let d = min_sum(&u_info.get_separation(), &v_info.get_separation());
    (a, d)
}

/// raw index from the pair information of the two solutions.
pub fn calculate_gri(u_info: &PairInformation, v_info: &PairInformation, tmax: f64) -> f64 {
    let (a, d) = agreements(u_info, v_info);
    (a + d) / tmax
}

/// expectation of the raw index under random pairing of pair values
pub fn calculate_gri_expectation(
    u_info: &PairInformation,
    v_info: &PairInformation,
    tmax: f64,
) -> f64 {
    let a_expectation = min_sum_expectation(&u_info.get_joint(), &v_info.get_joint());
    let d_expectation = min_sum_expectation(&u_info.get_separation(), &v_info.get_separation());
    log::debug!(
        "a expectation : {:.5e}, d expectation : {:.5e}",
        a_expectation,
        d_expectation
    );
    (a_expectation + d_expectation) / tmax
}

/// chance correction. Not finite if expectation is 1.
pub fn adjust(gri: f64, expectation: f64) -> f64 {
    (gri - expectation) / (1. - expectation)
}

//=================================================================================================

// end of mod tests
