//! describes a clustering solution as a membership matrix.
//!
//! A membership matrix has shape (nb_clusters, nb_objects), entry \[r, i\] is the degree to which object i
//! belongs to cluster r. No normalization of rows or columns is required so the same structure covers
//! exclusive hard, fuzzy/probabilistic, non-exclusive hard and possibilistic clusterings.

use indexmap::IndexSet;
use ndarray::{Array2, ArrayView2};
use num_traits::Float;
use std::hash::Hash;

use crate::error::GriError;

/// A validated membership matrix, all degrees are stored as f64 in \[0., 1.\]
#[derive(Clone, Debug)]
pub struct Membership {
    // dimension (nb_clusters, nb_objects)
    degrees: Array2<f64>,
}

impl Membership {
    /// checks all degrees are in \[0., 1.\] and converts them to f64.
    pub fn new<F: Float>(degrees: &ArrayView2<F>) -> Result<Self, GriError> {
        Membership::with_name(degrees, "membership")
    }

    // name is the argument name reported in case of domain violation
    pub(crate) fn with_name<F: Float>(
        degrees: &ArrayView2<F>,
        name: &'static str,
    ) -> Result<Self, GriError> {
        let degrees = degrees.mapv(|x| x.to_f64().unwrap_or(f64::NAN));
        check_domain(&degrees.view(), name)?;
        Ok(Membership { degrees })
    }

    /// builds the one-hot membership matrix of an exclusive hard clustering.
    /// labels\[i\] is the cluster of object i, rows are ordered by first appearance of labels.
    pub fn from_labels<DataLabel>(labels: &[DataLabel]) -> Self
    where
        DataLabel: Hash + Eq + Clone,
    {
        // converts labels to contiguous interval of usize. rank = IndexSet::get_index_of(label)
        let ranks: IndexSet<DataLabel> = labels.iter().cloned().collect();
        let mut degrees = Array2::<f64>::zeros((ranks.len(), labels.len()));
        for (i, label) in labels.iter().enumerate() {
            if let Some(r) = ranks.get_index_of(label) {
                degrees[[r, i]] = 1.;
            }
        }
        log::debug!(
            "Membership::from_labels nb clusters : {}, nb objects : {}",
            ranks.len(),
            labels.len()
        );
        Membership { degrees }
    }

    /// builds the membership matrix of a non-exclusive hard clustering.
    /// sets\[i\] lists all the clusters object i belongs to, an empty set leaves the object unclustered.
    pub fn from_label_sets<DataLabel, Set>(sets: &[Set]) -> Self
    where
        DataLabel: Hash + Eq + Clone,
        Set: AsRef<[DataLabel]>,
    {
        let ranks: IndexSet<DataLabel> = sets
            .iter()
            .flat_map(|s| s.as_ref().iter().cloned())
            .collect();
        let mut degrees = Array2::<f64>::zeros((ranks.len(), sets.len()));
        for (i, set) in sets.iter().enumerate() {
            for label in set.as_ref() {
                if let Some(r) = ranks.get_index_of(label) {
                    degrees[[r, i]] = 1.;
                }
            }
        }
        Membership { degrees }
    }

    pub fn get_nb_clusters(&self) -> usize {
        self.degrees.nrows()
    }

    pub fn get_nb_objects(&self) -> usize {
        self.degrees.ncols()
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.degrees.view()
    }
} // end of impl Membership

// returns the first entry out of [0,1], NaN included
fn check_domain(degrees: &ArrayView2<f64>, name: &'static str) -> Result<(), GriError> {
    match degrees
        .indexed_iter()
        .find(|(_, v)| !(0. ..=1.).contains(*v))
    {
        Some(((cluster, object), value)) => Err(GriError::DomainViolation {
            matrix: name,
            cluster,
            object,
            value: *value,
        }),
        None => Ok(()),
    }
}

//========================================================================================

// end of mod tests
