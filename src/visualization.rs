/// Visualization module: world choropleth of preamble clusters.
///
/// Produces a self-contained HTML fragment holding:
/// - One SVG path per country, filled by cluster label
/// - A native `<title>` per path plus a floating tooltip with the country name
/// - A legend listing the labels in canonical order
/// - Zoom, pan and reset handled by atlas_map.js
///
/// Projection is equirectangular (x = longitude, y = -latitude) and the
/// viewBox is fitted to the union of all rendered polygons. No basemap is
/// drawn underneath.
use serde_json::json;
use tracing::debug;

use crate::geometry::{Bounds, Polygon};
use crate::html::escape_html;
use crate::labels::ClusterLabel;
use crate::merge::LabeledCountries;

const MAP_JS: &str = include_str!("atlas_map.js");

// ── Config ──────────────────────────────────────────────────────────────────

/// Configuration for the choropleth.
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    /// Heading shown above the map
    pub title: String,
    /// Caption above the legend entries
    pub legend_title: String,
    /// Fixed map height; width always follows the container
    pub height_px: u32,
    /// Fill for countries without a cluster label
    pub missing_color: String,
    /// Largest zoom factor relative to the fitted view
    pub max_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            title: "World Map Colored by Preambles of Countries\u{2019} Constitutions".to_string(),
            legend_title: "Cluster Categories".to_string(),
            height_px: 900,
            missing_color: crate::labels::MISSING_COLOR.to_string(),
            max_zoom: 40.0,
        }
    }
}

// ── Intermediate data structures ────────────────────────────────────────────

struct CountryPath {
    name: String,
    label: Option<ClusterLabel>,
    d: String,
}

/// SVG viewBox as (x, y, width, height).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    fn as_array(&self) -> [f64; 4] {
        [self.x, self.y, self.width, self.height]
    }
}

// ── Layout ──────────────────────────────────────────────────────────────────

/// Fit the viewBox to the rendered polygons, or to the whole world when
/// nothing is rendered.
pub fn fit_view(countries: &LabeledCountries) -> ViewBox {
    let bounds = countries
        .countries
        .iter()
        .filter_map(|c| c.shape.bounds())
        .reduce(Bounds::union)
        .unwrap_or(Bounds::WORLD);

    // 2% padding, at least one degree so a single point still has an area.
    let pad = (bounds.width().max(bounds.height()) * 0.02).max(1.0);
    ViewBox {
        x: bounds.min_x - pad,
        y: -bounds.max_y - pad,
        width: bounds.width() + 2.0 * pad,
        height: bounds.height() + 2.0 * pad,
    }
}

fn polygon_path(polygon: &Polygon, d: &mut String) {
    for ring in polygon.rings.iter().filter(|r| !r.is_empty()) {
        for (i, (x, y)) in ring.iter().enumerate() {
            d.push(if i == 0 { 'M' } else { 'L' });
            d.push_str(&format!("{:.3},{:.3}", x, -y));
        }
        d.push('Z');
    }
}

fn extract_paths(countries: &LabeledCountries) -> Vec<CountryPath> {
    countries
        .countries
        .iter()
        .map(|c| {
            let mut d = String::new();
            for polygon in c.shape.polygons() {
                polygon_path(polygon, &mut d);
            }
            CountryPath {
                name: c.country_name.clone(),
                label: c.cluster_label,
                d,
            }
        })
        .collect()
}

// ── HTML generation ─────────────────────────────────────────────────────────

fn render_path(path: &CountryPath, config: &MapConfig) -> String {
    let fill = match path.label {
        Some(label) => label.color(),
        None => config.missing_color.as_str(),
    };
    let cluster = path.label.map(ClusterLabel::as_str).unwrap_or("");
    format!(
        r#"<path class="country" d="{d}" fill="{fill}" data-name="{name}" data-cluster="{cluster}"><title>{name}</title></path>"#,
        d = path.d,
        fill = escape_html(fill),
        name = escape_html(&path.name),
        cluster = escape_html(cluster),
    )
}

fn render_legend(countries: &LabeledCountries, config: &MapConfig) -> String {
    let items: String = countries
        .categories
        .iter()
        .map(|label| {
            format!(
                r#"<li><span class="atlas-swatch" style="background:{color};"></span>{name}</li>"#,
                color = label.color(),
                name = escape_html(label.as_str()),
            )
        })
        .collect();
    format!(
        r#"<div class="atlas-legend"><div class="atlas-legend-title">{title}</div><ul>{items}</ul></div>"#,
        title = escape_html(&config.legend_title),
    )
}

/// Render the choropleth as a self-contained HTML fragment.
///
/// An empty collection still renders: the frame, legend and controls appear
/// over a whole-world view with no country paths.
pub fn generate_map_html(countries: &LabeledCountries, config: &MapConfig) -> String {
    let view = fit_view(countries);
    let paths = extract_paths(countries);
    debug!(
        paths = paths.len(),
        view = ?view.as_array(),
        "rendering choropleth"
    );

    let body: String = paths.iter().map(|p| render_path(p, config)).collect();
    let view_box = view
        .as_array()
        .iter()
        .map(|v| format!("{:.3}", v))
        .collect::<Vec<_>>()
        .join(" ");

    let js_config = json!({
        "svgId": "atlas-svg",
        "tooltipId": "atlas-tooltip",
        "zoomLabelId": "atlas-zoom-label",
        "controlName": "atlasControls",
        "viewBox": view.as_array(),
        "maxZoom": config.max_zoom,
    });

    format!(
        r##"<div class="atlas-map" style="position:relative; width:100%; border:1px solid #dee2e6; border-radius:4px; background:#fff;">
  <div style="padding:4px 8px; border-bottom:1px solid #dee2e6; font-family:sans-serif; font-size:12px; color:#495057; display:flex; align-items:center; gap:8px;">
    <span style="font-weight:600;">{title}</span>
    <button onclick="atlasControls.zoom(1.5)" style="cursor:pointer; padding:2px 8px;">Zoom +</button>
    <button onclick="atlasControls.zoom(1/1.5)" style="cursor:pointer; padding:2px 8px;">Zoom −</button>
    <button onclick="atlasControls.reset()" style="cursor:pointer; padding:2px 8px;">Reset</button>
    <span id="atlas-zoom-label" style="color:#868e96; font-size:11px;">1.0x</span>
  </div>
  <div style="position:relative; display:flex;">
    <svg id="atlas-svg" xmlns="http://www.w3.org/2000/svg" width="100%" height="{height}" viewBox="{view_box}" preserveAspectRatio="xMidYMid meet" style="flex:1; cursor:grab;">
      <style>
        .country {{ stroke: #ffffff; stroke-width: 0.5; vector-effect: non-scaling-stroke; fill-rule: evenodd; }}
        .country:hover {{ stroke: #343a40; stroke-width: 1.5; }}
      </style>
      {body}
    </svg>
    {legend}
    <div id="atlas-tooltip" style="position:absolute; display:none; pointer-events:none; background:#343a40; color:#fff; font-family:sans-serif; font-size:12px; padding:2px 6px; border-radius:3px;"></div>
  </div>
</div>
<script>
{map_js}
AtlasMap.create({js_config});
</script>"##,
        title = escape_html(&config.title),
        height = config.height_px,
        view_box = view_box,
        body = body,
        legend = render_legend(countries, config),
        map_js = MAP_JS,
        js_config = js_config,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Polygon, Shape};
    use crate::merge::MergedCountry;

    fn country(name: &str, id: Option<i64>, x: f64, y: f64) -> MergedCountry {
        MergedCountry {
            country_name: name.to_string(),
            shape: Shape::Polygon(Polygon {
                rings: vec![vec![(x, y), (x + 10.0, y), (x + 10.0, y + 10.0), (x, y)]],
            }),
            cluster_id: id,
            cluster_label: ClusterLabel::lookup(id),
        }
    }

    fn labeled(countries: Vec<MergedCountry>) -> LabeledCountries {
        LabeledCountries {
            countries,
            categories: &ClusterLabel::ALL,
        }
    }

    #[test]
    fn view_fits_union_of_polygons() {
        let view = fit_view(&labeled(vec![
            country("A", Some(0), 0.0, 0.0),
            country("B", Some(1), 40.0, 20.0),
        ]));
        // bounds 0..50 x 0..30, pad 1.0
        assert_eq!(
            view,
            ViewBox {
                x: -1.0,
                y: -31.0,
                width: 52.0,
                height: 32.0
            }
        );
    }

    #[test]
    fn empty_collection_renders_world_view() {
        let countries = labeled(vec![]);
        let view = fit_view(&countries);
        // world bounds plus 7.2 degrees of padding
        assert!((view.x + 187.2).abs() < 1e-9 && (view.y + 97.2).abs() < 1e-9);
        assert!((view.width - 374.4).abs() < 1e-9 && (view.height - 194.4).abs() < 1e-9);

        let html = generate_map_html(&countries, &MapConfig::default());
        assert!(!html.contains(r#"class="country""#));
        assert!(html.contains("Cluster Categories"));
    }

    #[test]
    fn countries_are_filled_by_label() {
        let html = generate_map_html(
            &labeled(vec![
                country("France", Some(4), 0.0, 40.0),
                country("Germany", None, 10.0, 45.0),
            ]),
            &MapConfig::default(),
        );
        assert!(html.contains(r##"fill="#b043e2" data-name="France""##));
        assert!(html.contains(r##"fill="#d9d9d9" data-name="Germany" data-cluster="""##));
        assert!(html.contains("<title>France</title>"));
        assert_eq!(html.matches(r#"class="country""#).count(), 2);
    }

    #[test]
    fn legend_lists_labels_in_canonical_order() {
        let html = generate_map_html(
            &labeled(vec![country("Kenya", Some(6), 30.0, 0.0)]),
            &MapConfig::default(),
        );
        let legend = &html[html.find(r#"<div class="atlas-legend">"#).unwrap()..];
        let positions: Vec<usize> = ClusterLabel::ALL
            .iter()
            .map(|l| legend.find(&escape_html(l.as_str())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn all_unlabeled_countries_use_missing_color() {
        let config = MapConfig {
            missing_color: "#eeeeee".into(),
            ..MapConfig::default()
        };
        let html = generate_map_html(
            &labeled(vec![
                country("A", None, 0.0, 0.0),
                country("B", Some(12), 20.0, 0.0),
            ]),
            &config,
        );
        assert_eq!(html.matches(r##"fill="#eeeeee""##).count(), 2);
    }

    #[test]
    fn names_are_escaped() {
        let html = generate_map_html(
            &labeled(vec![country("Côte <d'Ivoire>", Some(6), 0.0, 0.0)]),
            &MapConfig::default(),
        );
        assert!(html.contains("Côte &lt;d&#39;Ivoire&gt;"));
        assert!(!html.contains("<d'Ivoire>"));
    }

    #[test]
    fn latitude_is_flipped() {
        let paths = extract_paths(&labeled(vec![country("A", None, 5.0, 20.0)]));
        assert!(paths[0].d.starts_with("M5.000,-20.000L15.000,-20.000"));
        assert!(paths[0].d.ends_with('Z'));
    }
}
