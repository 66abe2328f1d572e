//! Pairwise information extracted from one membership matrix.
//!

use ndarray::{Array1, ArrayView1, ArrayView2, Axis};
use rayon::prelude::*;

use crate::membership::Membership;

/// number of unordered pairs of distinct objects
pub fn nb_pairs(nb_objects: usize) -> usize {
    if nb_objects < 2 {
        0
    } else {
        nb_objects * (nb_objects - 1) / 2
    }
}

/// rank of pair (i,j), i < j, in the pairwise arrays.
/// Pairs are stored as the upper triangle of a (nb_objects, nb_objects) matrix, row after row.
pub fn pair_rank(nb_objects: usize, i: usize, j: usize) -> usize {
    assert!(i < j && j < nb_objects, "pair_rank needs i < j < nb_objects");
    i * nb_objects - i * (i + 1) / 2 + (j - i - 1)
}

#[cfg_attr(doc, katexit::katexit)]
/// Joint and separation information of all pairs of objects of a clustering solution.
///
/// With $ M $ the membership matrix and $ i < j $ :
/// - joint : $ J_{ij} = \sum_{r} M_{ri} M_{rj} $, the upper triangle of $ M^{t} M $
/// - separation : $ S_{ij} = \sum_{r \ne s} M_{ri} M_{sj} $, the upper triangle of $ M^{t} (\mathbb{1} - I) M $
///
/// For an exclusive hard clustering $ J_{ij} + S_{ij} = 1 $ and we get back the pair terms of the Rand index.
#[derive(Clone, Debug)]
pub struct PairInformation {
    nb_objects: usize,
    joint: Array1<f64>,
    separation: Array1<f64>,
}

impl PairInformation {
    pub fn new(membership: &Membership) -> Self {
        PairInformation::from_view(&membership.view())
    }

    /// degrees is a (nb_clusters, nb_objects) matrix, not checked here.
    pub fn from_view(degrees: &ArrayView2<f64>) -> Self {
        let (nb_clusters, nb_objects) = degrees.dim();
        log::debug!(
            "entering PairInformation, nb_clusters : {}, nb_objects : {}",
            nb_clusters,
            nb_objects
        );
        let col_sums = degrees.sum_axis(Axis(0));
        // each object gets the pairs it opens, rows are concatenated in order afterwards
        let rows: Vec<Vec<(f64, f64)>> = (0..nb_objects)
            .into_par_iter()
            .map(|i| {
                let ci = degrees.column(i);
                ((i + 1)..nb_objects)
                    .map(|j| pair_terms(&ci, &degrees.column(j), col_sums[j]))
                    .collect::<Vec<(f64, f64)>>()
            })
            .collect();
        //
        let nb_pairs = nb_pairs(nb_objects);
        let mut joint = Vec::<f64>::with_capacity(nb_pairs);
        let mut separation = Vec::<f64>::with_capacity(nb_pairs);
        for (j, s) in rows.into_iter().flatten() {
            joint.push(j);
            separation.push(s);
        }
        assert_eq!(joint.len(), nb_pairs);
        log::debug!("PairInformation computed {} pairs", nb_pairs);
        //
        PairInformation {
            nb_objects,
            joint: Array1::from_vec(joint),
            separation: Array1::from_vec(separation),
        }
    }

    pub fn get_nb_objects(&self) -> usize {
        self.nb_objects
    }

    pub fn get_nb_pairs(&self) -> usize {
        self.joint.len()
    }

    /// returns the J array
    pub fn get_joint(&self) -> ArrayView1<'_, f64> {
        self.joint.view()
    }

    /// returns the S array
    pub fn get_separation(&self) -> ArrayView1<'_, f64> {
        self.separation.view()
    }

    /// returns T = J + S
    pub fn get_total(&self) -> Array1<f64> {
        &self.joint + &self.separation
    }

    /// sum of T, the normalization constant of the clustering
    pub fn total_information(&self) -> f64 {
        self.get_total().sum()
    }
} // end of impl PairInformation

// (joint, separation) of a pair of columns.
// separation is computed as sum_r m_ri * (sum_s m_sj - m_rj), terms stay non negative
fn pair_terms(ci: &ArrayView1<f64>, cj: &ArrayView1<f64>, cj_sum: f64) -> (f64, f64) {
    let mut joint = 0.;
    let mut separation = 0.;
    for (a, b) in ci.iter().zip(cj.iter()) {
        joint += a * b;
        separation += a * (cj_sum - b);
    }
    (joint, separation)
}

//========================================================================================

// end of mod tests
