/// Static descriptive text for each preamble cluster.
use crate::labels::ClusterLabel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterMetadata {
    pub label: ClusterLabel,
    pub sample_countries: &'static str,
    pub interpretation: &'static str,
}

/// Records in editorial presentation order.
pub const CLUSTER_METADATA: [ClusterMetadata; 7] = [
    ClusterMetadata {
        label: ClusterLabel::LegalInstitutional,
        sample_countries: "Australia, Canada, United Kingdom, France, Mexico",
        interpretation: "Common-law or Commonwealth traditions emphasizing legality and institutional formality.",
    },
    ClusterMetadata {
        label: ClusterLabel::UnityAndPluralism,
        sample_countries: "South Africa, Kenya, Congo, Ethiopia",
        interpretation: "Generally, African constitutions stressing unity, dignity, and cultural pluralism.",
    },
    ClusterMetadata {
        label: ClusterLabel::FaithAndFounding,
        sample_countries: "Argentina, Bolivia, Brazil, Chile, United States of America",
        interpretation: "Constitutions emphasizing faith, moral values, social justice, and independence, mostly found in South Americas.",
    },
    ClusterMetadata {
        label: ClusterLabel::CivicRepublic,
        sample_countries: "India, Ukraine, Russia, Estonia",
        interpretation: "Countries historically within or influenced by the USSR\u{2019}s sphere of influence, focusing on peace, civic responsibility, and renewal.",
    },
    ClusterMetadata {
        label: ClusterLabel::ReligiousAdministrative,
        sample_countries: "Afghanistan, Pakistan, Iran, Iraq, Egypt",
        interpretation: "Governance guided by religious principles and structured administrative order, mostly found in Islamic nations.",
    },
    ClusterMetadata {
        label: ClusterLabel::CollectiveProgress,
        sample_countries: "Indonesia, Bangladesh, Bhutan, Thailand, China",
        interpretation: "Socialist or revolutionary constitutions centered on unity and collective progress.",
    },
    ClusterMetadata {
        label: ClusterLabel::ParliamentaryAdministrative,
        sample_countries: "Germany, Austria, Belgium, Norway, Italy",
        interpretation: "European parliamentary and administrative constitutional systems.",
    },
];

pub fn metadata_for(label: ClusterLabel) -> &'static ClusterMetadata {
    let index = match label {
        ClusterLabel::LegalInstitutional => 0,
        ClusterLabel::UnityAndPluralism => 1,
        ClusterLabel::FaithAndFounding => 2,
        ClusterLabel::CivicRepublic => 3,
        ClusterLabel::ReligiousAdministrative => 4,
        ClusterLabel::CollectiveProgress => 5,
        ClusterLabel::ParliamentaryAdministrative => 6,
    };
    &CLUSTER_METADATA[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_label_has_exactly_one_record() {
        let labels: HashSet<ClusterLabel> = CLUSTER_METADATA.iter().map(|m| m.label).collect();
        assert_eq!(labels.len(), ClusterLabel::ALL.len());
        for label in ClusterLabel::ALL {
            assert_eq!(metadata_for(label).label, label);
        }
    }

    #[test]
    fn presentation_order_is_editorial() {
        assert_eq!(CLUSTER_METADATA[0].label, ClusterLabel::LegalInstitutional);
        assert_eq!(CLUSTER_METADATA[1].label, ClusterLabel::UnityAndPluralism);
        assert_eq!(
            CLUSTER_METADATA[6].label,
            ClusterLabel::ParliamentaryAdministrative
        );
        assert!(metadata_for(ClusterLabel::LegalInstitutional)
            .sample_countries
            .contains("France"));
    }
}
