/// Left join of country boundaries with cluster assignments, and label
/// application over the joined rows.
use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use crate::geometry::{CountryGeometry, Shape};
use crate::labels::ClusterLabel;
use crate::loader::CountryClusterRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct MergedCountry {
    pub country_name: String,
    pub shape: Shape,
    pub cluster_id: Option<i64>,
    pub cluster_label: Option<ClusterLabel>,
}

/// Labelled rows plus the categorical order they render in.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledCountries {
    pub countries: Vec<MergedCountry>,
    pub categories: &'static [ClusterLabel],
}

impl LabeledCountries {
    pub fn unlabeled_count(&self) -> usize {
        self.countries
            .iter()
            .filter(|c| c.cluster_label.is_none())
            .count()
    }

    /// Number of countries per label, in category order.
    pub fn counts_by_label(&self) -> Vec<(ClusterLabel, usize)> {
        self.categories
            .iter()
            .map(|&label| {
                let n = self
                    .countries
                    .iter()
                    .filter(|c| c.cluster_label == Some(label))
                    .count();
                (label, n)
            })
            .collect()
    }
}

/// Left outer join on exact country name.
///
/// Every geometry row survives, in input order. Assignments with no matching
/// geometry are dropped. When a name appears more than once in the
/// assignments the first occurrence wins.
pub fn merge(
    geometries: &[CountryGeometry],
    assignments: &[CountryClusterRecord],
) -> Vec<MergedCountry> {
    let mut by_name: HashMap<&str, Option<i64>> = HashMap::with_capacity(assignments.len());
    for record in assignments {
        by_name
            .entry(record.country_name.as_str())
            .or_insert(record.cluster_id);
    }

    let merged: Vec<MergedCountry> = geometries
        .iter()
        .map(|g| {
            let cluster_id = by_name.get(g.country_name.as_str()).copied().flatten();
            MergedCountry {
                country_name: g.country_name.clone(),
                shape: g.shape.clone(),
                cluster_id,
                cluster_label: None,
            }
        })
        .collect();

    let matched = merged
        .iter()
        .filter(|c| by_name.contains_key(c.country_name.as_str()))
        .count();
    let geometry_names: HashSet<&str> =
        geometries.iter().map(|g| g.country_name.as_str()).collect();
    for record in assignments {
        if !geometry_names.contains(record.country_name.as_str()) {
            debug!(country = %record.country_name, "assignment has no matching geometry");
        }
    }
    info!(
        geometries = geometries.len(),
        matched,
        unmatched = geometries.len() - matched,
        "merged assignments onto geometry"
    );
    merged
}

/// Fill `cluster_label` from `cluster_id` for every row.
pub fn apply_labels(merged: Vec<MergedCountry>) -> LabeledCountries {
    let countries = merged
        .into_iter()
        .map(|mut c| {
            c.cluster_label = ClusterLabel::lookup(c.cluster_id);
            c
        })
        .collect();
    LabeledCountries {
        countries,
        categories: &ClusterLabel::ALL,
    }
}
