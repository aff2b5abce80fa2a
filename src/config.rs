/// Dashboard configuration, loadable from TOML.
///
/// Every field has a default so an empty file (or no file) reproduces the
/// standard page.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AtlasError;
use crate::labels::{is_label_color, MISSING_COLOR};
use crate::loader::GeometrySource;
use crate::schema::sources;
use crate::visualization::MapConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    pub data: DataConfig,
    pub page: PageConfig,
    pub map: MapSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// CSV with `Country` and `cluster` columns
    pub assignments: PathBuf,
    /// GeoJSON (or zipped GeoJSON) file path or http(s) URL
    pub geometry: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            assignments: PathBuf::from(sources::ASSIGNMENTS_PATH),
            geometry: sources::COUNTRIES_URL.to_string(),
        }
    }
}

impl DataConfig {
    pub fn geometry_source(&self) -> GeometrySource {
        match self.geometry.parse() {
            Ok(source) => source,
            Err(never) => match never {},
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub page_title: String,
    pub heading: String,
    pub description: String,
    pub notebook_heading: String,
    pub notebook_label: String,
    pub notebook_url: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_title: "Constitution Preamble Clusters".to_string(),
            heading: "Constitution Preamble Clusters Across the World".to_string(),
            description: "Explore how different constitutions express national ideals and values through their preambles.".to_string(),
            notebook_heading: "Notebook Access".to_string(),
            notebook_label: "\u{1F4D3} View full analysis notebook on GitHub".to_string(),
            notebook_url: "https://github.com/ShailKPatel/Constitutional-Values/blob/main/notebooks/01_data_preprocessing.ipynb".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    pub title: String,
    pub legend_title: String,
    pub height_px: u32,
    pub missing_color: String,
    pub max_zoom: f64,
}

impl Default for MapSettings {
    fn default() -> Self {
        let map = MapConfig::default();
        Self {
            title: map.title,
            legend_title: map.legend_title,
            height_px: map.height_px,
            missing_color: MISSING_COLOR.to_string(),
            max_zoom: map.max_zoom,
        }
    }
}

impl MapSettings {
    /// Build the renderer config. The missing-label fill must differ from
    /// every label colour.
    pub fn to_map_config(&self) -> Result<MapConfig, AtlasError> {
        if is_label_color(&self.missing_color) {
            return Err(AtlasError::InvalidData(format!(
                "map.missing_color {} is already a cluster label colour",
                self.missing_color
            )));
        }
        Ok(MapConfig {
            title: self.title.clone(),
            legend_title: self.legend_title.clone(),
            height_px: self.height_px,
            missing_color: self.missing_color.clone(),
            max_zoom: self.max_zoom,
        })
    }
}

impl AtlasConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, AtlasError> {
        let config: AtlasConfig = toml::from_str(text)?;
        config.map.to_map_config()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, AtlasError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = AtlasConfig::from_toml_str("").unwrap();
        assert_eq!(config, AtlasConfig::default());
        assert_eq!(config.map.height_px, 900);
        assert_eq!(config.map.legend_title, "Cluster Categories");
        assert_eq!(
            config.data.geometry_source(),
            GeometrySource::Url(sources::COUNTRIES_URL.to_string())
        );
    }

    #[test]
    fn partial_sections_override_only_named_fields() {
        let config = AtlasConfig::from_toml_str(
            r#"
            [data]
            geometry = "data/world.geojson"

            [map]
            height_px = 600
            "#,
        )
        .unwrap();
        assert_eq!(
            config.data.geometry_source(),
            GeometrySource::Path(PathBuf::from("data/world.geojson"))
        );
        assert_eq!(
            config.data.assignments,
            PathBuf::from(sources::ASSIGNMENTS_PATH)
        );
        assert_eq!(config.map.to_map_config().unwrap().height_px, 600);
        assert_eq!(config.page, PageConfig::default());
    }

    #[test]
    fn bad_types_are_rejected() {
        let err = AtlasConfig::from_toml_str("[map]\nheight_px = \"tall\"\n").unwrap_err();
        assert!(matches!(err, AtlasError::Config(_)));
    }

    #[test]
    fn missing_color_may_not_reuse_a_label_color() {
        let err = AtlasConfig::from_toml_str("[map]\nmissing_color = \"#B043E2\"\n").unwrap_err();
        assert!(matches!(err, AtlasError::InvalidData(_)));

        let mut config = AtlasConfig::default();
        config.map.missing_color = "#b043e2".into();
        assert!(config.map.to_map_config().is_err());

        config.map.missing_color = "#eeeeee".into();
        assert_eq!(config.map.to_map_config().unwrap().missing_color, "#eeeeee");
    }
}
