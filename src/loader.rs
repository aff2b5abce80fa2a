/// Input loading: cluster assignments (CSV) and country boundaries (GeoJSON).
///
/// Both loads are one-shot. Any I/O, HTTP or parse failure is returned to the
/// caller; nothing is retried.
use std::fmt;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use polars::prelude::*;
use tracing::{debug, info};

use crate::error::AtlasError;
use crate::geometry::{self, CountryGeometry};
use crate::schema::assignments;

#[derive(Debug, Clone, PartialEq)]
pub struct CountryClusterRecord {
    pub country_name: String,
    pub cluster_id: Option<i64>,
}

// ── Assignments ─────────────────────────────────────────────────────────────

/// Read the assignment table as a DataFrame with `Country` (String) and
/// `cluster` (Float64, null where the value is not numeric).
pub fn read_assignments_frame(path: &Path) -> Result<DataFrame, AtlasError> {
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0)) // all columns as String
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    let trimmed: Vec<String> = df
        .get_column_names_str()
        .iter()
        .map(|c| c.trim().to_string())
        .collect();
    df.set_column_names(trimmed.as_slice())?;

    for &name in &assignments::ALL {
        if df.column(name).is_err() {
            return Err(AtlasError::MissingColumn(name.to_string()));
        }
    }

    // Non-strict cast: anything unparseable becomes null.
    let df = df
        .lazy()
        .select([
            col(assignments::COUNTRY),
            col(assignments::CLUSTER)
                .str()
                .strip_chars(lit(" \t\r\n"))
                .cast(DataType::Float64),
        ])
        .collect()?;
    Ok(df)
}

/// Load (country, cluster id) pairs.
///
/// Cluster values that are blank, non-numeric or non-integral load as `None`.
/// Rows without a country name are dropped.
pub fn load_assignments(path: &Path) -> Result<Vec<CountryClusterRecord>, AtlasError> {
    let df = read_assignments_frame(path)?;
    let countries = df.column(assignments::COUNTRY)?.str()?;
    let clusters = df.column(assignments::CLUSTER)?.f64()?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let Some(country) = countries.get(i) else {
            debug!(row = i, "skipping assignment row without a country");
            continue;
        };
        records.push(CountryClusterRecord {
            country_name: country.to_string(),
            cluster_id: clusters.get(i).and_then(integral),
        });
    }

    info!(
        path = %path.display(),
        rows = records.len(),
        unparsed = records.iter().filter(|r| r.cluster_id.is_none()).count(),
        "loaded cluster assignments"
    );
    Ok(records)
}

fn integral(v: f64) -> Option<i64> {
    (v.is_finite() && v.fract() == 0.0).then_some(v as i64)
}

// ── Geometry ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometrySource {
    Path(PathBuf),
    Url(String),
}

impl FromStr for GeometrySource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(GeometrySource::Url(s.to_string()))
        } else {
            Ok(GeometrySource::Path(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for GeometrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometrySource::Path(p) => write!(f, "{}", p.display()),
            GeometrySource::Url(u) => f.write_str(u),
        }
    }
}

impl GeometrySource {
    fn read_bytes(&self) -> Result<Vec<u8>, AtlasError> {
        match self {
            GeometrySource::Path(p) => Ok(std::fs::read(p)?),
            GeometrySource::Url(u) => {
                let response = reqwest::blocking::get(u.as_str())?.error_for_status()?;
                Ok(response.bytes()?.to_vec())
            }
        }
    }
}

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Pull GeoJSON text out of a payload that is either plain GeoJSON or a ZIP
/// archive holding one `.geojson` / `.json` member.
fn extract_geojson(bytes: Vec<u8>) -> Result<String, AtlasError> {
    if !bytes.starts_with(ZIP_MAGIC) {
        return String::from_utf8(bytes)
            .map_err(|e| AtlasError::InvalidData(format!("geometry is not UTF-8: {e}")));
    }

    let mut archive = ::zip::ZipArchive::new(Cursor::new(bytes))?;
    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let name = file.name().to_ascii_lowercase();
        if name.ends_with(".geojson") || name.ends_with(".json") {
            debug!(member = %file.name(), "reading geometry from archive member");
            let mut text = String::new();
            file.read_to_string(&mut text)?;
            return Ok(text);
        }
    }
    Err(AtlasError::NotFound(
        "no .geojson member in geometry archive".to_string(),
    ))
}

/// Load country boundaries from a local file or a URL.
pub fn load_geometry(source: &GeometrySource) -> Result<Vec<CountryGeometry>, AtlasError> {
    let bytes = source.read_bytes()?;
    let text = extract_geojson(bytes)?;
    let countries = geometry::parse_feature_collection(&text)?;
    info!(source = %source, countries = countries.len(), "loaded country geometry");
    Ok(countries)
}
