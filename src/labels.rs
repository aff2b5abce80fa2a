/// Cluster label registry.
///
/// Maps the upstream cluster ids (0..=6) to their human-readable names and
/// fixes the canonical ordering used for the legend and colour assignment.
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClusterLabel {
    FaithAndFounding,
    CivicRepublic,
    ReligiousAdministrative,
    CollectiveProgress,
    LegalInstitutional,
    ParliamentaryAdministrative,
    UnityAndPluralism,
}

/// Fill for countries without a cluster. Not one of the label colours.
pub const MISSING_COLOR: &str = "#d9d9d9";

impl ClusterLabel {
    /// Canonical order, indexed by cluster id.
    pub const ALL: [ClusterLabel; 7] = [
        ClusterLabel::FaithAndFounding,
        ClusterLabel::CivicRepublic,
        ClusterLabel::ReligiousAdministrative,
        ClusterLabel::CollectiveProgress,
        ClusterLabel::LegalInstitutional,
        ClusterLabel::ParliamentaryAdministrative,
        ClusterLabel::UnityAndPluralism,
    ];

    pub fn from_id(id: i64) -> Option<ClusterLabel> {
        usize::try_from(id)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Total lookup over a nullable cluster id.
    pub fn lookup(id: Option<i64>) -> Option<ClusterLabel> {
        id.and_then(Self::from_id)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClusterLabel::FaithAndFounding => "Faith & Founding",
            ClusterLabel::CivicRepublic => "Civic Republic",
            ClusterLabel::ReligiousAdministrative => "Religious-Administrative",
            ClusterLabel::CollectiveProgress => "Collective Progress",
            ClusterLabel::LegalInstitutional => "Legal-Institutional",
            ClusterLabel::ParliamentaryAdministrative => "Parliamentary-Administrative",
            ClusterLabel::UnityAndPluralism => "Unity & Pluralism",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ClusterLabel::FaithAndFounding => "#ff6692",
            ClusterLabel::CivicRepublic => "#ffa15a",
            ClusterLabel::ReligiousAdministrative => "#7dd123",
            ClusterLabel::CollectiveProgress => "#ff97ff",
            ClusterLabel::LegalInstitutional => "#b043e2",
            ClusterLabel::ParliamentaryAdministrative => "#219fe9",
            ClusterLabel::UnityAndPluralism => "#f7eb41",
        }
    }
}

impl fmt::Display for ClusterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `color` is one of the label colours, ignoring hex case.
pub fn is_label_color(color: &str) -> bool {
    let color = color.trim();
    ClusterLabel::ALL
        .iter()
        .any(|l| l.color().eq_ignore_ascii_case(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_id_in_range_has_a_label() {
        for i in 0..=6 {
            let label = ClusterLabel::from_id(i).expect("label for id in range");
            assert_eq!(ClusterLabel::ALL[i as usize], label);
        }
        assert_eq!(
            ClusterLabel::from_id(4).map(ClusterLabel::as_str),
            Some("Legal-Institutional")
        );
    }

    #[test]
    fn ids_outside_range_have_no_label() {
        assert_eq!(ClusterLabel::from_id(-1), None);
        assert_eq!(ClusterLabel::from_id(7), None);
        assert_eq!(ClusterLabel::from_id(i64::MAX), None);
        assert_eq!(ClusterLabel::lookup(None), None);
    }

    #[test]
    fn canonical_order_matches_ids() {
        let names: Vec<&str> = ClusterLabel::ALL.iter().map(|l| l.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Faith & Founding",
                "Civic Republic",
                "Religious-Administrative",
                "Collective Progress",
                "Legal-Institutional",
                "Parliamentary-Administrative",
                "Unity & Pluralism",
            ]
        );
    }

    #[test]
    fn colors_are_distinct_and_exclude_missing() {
        let colors: HashSet<&str> = ClusterLabel::ALL.iter().map(|l| l.color()).collect();
        assert_eq!(colors.len(), ClusterLabel::ALL.len());
        assert!(!colors.contains(MISSING_COLOR));
        assert!(!is_label_color(MISSING_COLOR));
    }

    #[test]
    fn label_color_check_ignores_case() {
        assert!(is_label_color("#b043e2"));
        assert!(is_label_color("#B043E2"));
        assert!(!is_label_color("#b043e3"));
    }
}
