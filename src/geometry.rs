/// Country boundary shapes and the GeoJSON subset needed to read them.
///
/// Only `Polygon` and `MultiPolygon` geometries are modelled. Positions keep
/// longitude/latitude and drop any extra dimensions.
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::AtlasError;
use crate::schema::geometry;

pub type Ring = Vec<(f64, f64)>;

/// Exterior ring first, holes after.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub rings: Vec<Ring>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polygon(Polygon),
    MultiPolygon(Vec<Polygon>),
}

impl Shape {
    pub fn polygons(&self) -> &[Polygon] {
        match self {
            Shape::Polygon(p) => std::slice::from_ref(p),
            Shape::MultiPolygon(ps) => ps,
        }
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.polygons()
            .iter()
            .flat_map(|p| p.rings.iter())
            .flat_map(|r| r.iter())
            .fold(None, |acc: Option<Bounds>, &(x, y)| {
                Some(match acc {
                    Some(b) => b.include(x, y),
                    None => Bounds::point(x, y),
                })
            })
    }
}

/// Axis-aligned box in lon/lat degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub const WORLD: Bounds = Bounds {
        min_x: -180.0,
        min_y: -90.0,
        max_x: 180.0,
        max_y: 90.0,
    };

    fn point(x: f64, y: f64) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    fn include(self, x: f64, y: f64) -> Self {
        Self {
            min_x: self.min_x.min(x),
            min_y: self.min_y.min(y),
            max_x: self.max_x.max(x),
            max_y: self.max_y.max(y),
        }
    }

    pub fn union(self, other: Bounds) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountryGeometry {
    pub country_name: String,
    pub shape: Shape,
}

// ── GeoJSON wire types ──────────────────────────────────────────────────────

type Position = Vec<f64>;

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<GeometryObject>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum GeometryObject {
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    #[serde(other)]
    Unsupported,
}

fn to_ring(positions: Vec<Position>) -> Result<Ring, AtlasError> {
    positions
        .into_iter()
        .map(|p| match p.as_slice() {
            [x, y, ..] => Ok((*x, *y)),
            _ => Err(AtlasError::InvalidData(format!(
                "position needs at least 2 coordinates, got {}",
                p.len()
            ))),
        })
        .collect()
}

fn to_polygon(rings: Vec<Vec<Position>>) -> Result<Polygon, AtlasError> {
    Ok(Polygon {
        rings: rings.into_iter().map(to_ring).collect::<Result<_, _>>()?,
    })
}

/// Parse a GeoJSON FeatureCollection into country geometries.
///
/// Every feature must carry a string `NAME` property. Features without a
/// geometry, or with a geometry other than (Multi)Polygon, are skipped.
pub fn parse_feature_collection(text: &str) -> Result<Vec<CountryGeometry>, AtlasError> {
    let collection: FeatureCollection = serde_json::from_str(text)?;

    let mut countries = Vec::with_capacity(collection.features.len());
    for (i, feature) in collection.features.into_iter().enumerate() {
        let name = feature
            .properties
            .as_ref()
            .and_then(|props| props.get(geometry::NAME))
            .and_then(Value::as_str)
            .ok_or_else(|| {
                AtlasError::MissingColumn(format!("{} (feature {i})", geometry::NAME))
            })?
            .to_string();

        let shape = match feature.geometry {
            Some(GeometryObject::Polygon { coordinates }) => {
                Shape::Polygon(to_polygon(coordinates)?)
            }
            Some(GeometryObject::MultiPolygon { coordinates }) => Shape::MultiPolygon(
                coordinates
                    .into_iter()
                    .map(to_polygon)
                    .collect::<Result<_, _>>()?,
            ),
            Some(GeometryObject::Unsupported) => {
                warn!(country = %name, "skipping feature with unsupported geometry type");
                continue;
            }
            None => {
                warn!(country = %name, "skipping feature without geometry");
                continue;
            }
        };

        countries.push(CountryGeometry {
            country_name: name,
            shape,
        });
    }
    Ok(countries)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
      "type": "FeatureCollection",
      "features": [
        {"type": "Feature", "properties": {"NAME": "Square"},
         "geometry": {"type": "Polygon", "coordinates": [[[0,0],[10,0],[10,10],[0,10],[0,0]]]}},
        {"type": "Feature", "properties": {"NAME": "Islands", "POP_EST": 12},
         "geometry": {"type": "MultiPolygon", "coordinates": [
            [[[20,-5,0],[25,-5,0],[25,0,0],[20,-5,0]]],
            [[[30,40],[31,40],[31,41],[30,40]]]
         ]}},
        {"type": "Feature", "properties": {"NAME": "Point"},
         "geometry": {"type": "Point", "coordinates": [1,2]}},
        {"type": "Feature", "properties": {"NAME": "Nowhere"}, "geometry": null}
      ]
    }"#;

    #[test]
    fn parses_polygons_and_skips_other_geometries() {
        let countries = parse_feature_collection(SAMPLE).unwrap();
        let names: Vec<&str> = countries.iter().map(|c| c.country_name.as_str()).collect();
        assert_eq!(names, vec!["Square", "Islands"]);
        assert_eq!(countries[1].shape.polygons().len(), 2);
        assert_eq!(countries[1].shape.polygons()[0].rings[0][0], (20.0, -5.0));
    }

    #[test]
    fn bounds_cover_all_parts() {
        let countries = parse_feature_collection(SAMPLE).unwrap();
        let b = countries[1].shape.bounds().unwrap();
        assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (20.0, -5.0, 31.0, 41.0));
        let all = b.union(countries[0].shape.bounds().unwrap());
        assert_eq!((all.min_x, all.min_y), (0.0, -5.0));
    }

    #[test]
    fn missing_name_is_an_error() {
        let text = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{"ADMIN":"X"},
             "geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[0,1],[0,0]]]}}]}"#;
        let err = parse_feature_collection(text).unwrap_err();
        assert!(matches!(err, AtlasError::MissingColumn(_)));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            parse_feature_collection("{not json"),
            Err(AtlasError::Json(_))
        ));
    }
}
