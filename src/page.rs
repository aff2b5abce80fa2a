/// Page assembly: runs the pipeline and lays out the single-page dashboard.
///
/// Section order is fixed: title and description, the choropleth, the cluster
/// summaries, then the notebook link.
use tracing::info;

use crate::config::{AtlasConfig, PageConfig};
use crate::error::AtlasError;
use crate::html::escape_html;
use crate::loader::{load_assignments, load_geometry};
use crate::merge::{apply_labels, merge, LabeledCountries};
use crate::summary::render_summaries_html;
use crate::visualization::{generate_map_html, MapConfig};

const PAGE_CSS: &str = r#"
body { margin: 0; font-family: "Source Sans Pro", sans-serif; color: #31333f; background: #fff; }
main { max-width: none; padding: 2rem 3rem; }
h1 { font-size: 2.4rem; margin: 0 0 1rem; }
h2 { margin-top: 2.5rem; }
.atlas-legend { min-width: 220px; padding: 8px 12px; font-family: sans-serif; font-size: 13px; }
.atlas-legend-title { font-weight: 600; margin-bottom: 6px; }
.atlas-legend ul { list-style: none; margin: 0; padding: 0; }
.atlas-legend li { display: flex; align-items: center; gap: 6px; margin: 3px 0; }
.atlas-swatch { display: inline-block; width: 14px; height: 14px; border-radius: 2px; }
"#;

/// Load both inputs, join them and apply labels.
pub fn load_labeled(config: &AtlasConfig) -> Result<LabeledCountries, AtlasError> {
    let assignments = load_assignments(&config.data.assignments)?;
    let geometries = load_geometry(&config.data.geometry_source())?;
    let labeled = apply_labels(merge(&geometries, &assignments));
    info!(
        countries = labeled.countries.len(),
        unlabeled = labeled.unlabeled_count(),
        "labelled countries"
    );
    for (label, count) in labeled.counts_by_label() {
        info!(cluster = %label, countries = count, "cluster size");
    }
    Ok(labeled)
}

/// Lay out the full HTML document around an already labelled collection.
pub fn assemble_page(countries: &LabeledCountries, page: &PageConfig, map: &MapConfig) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{page_title}</title>
<style>{css}</style>
</head>
<body>
<main>
<h1>{heading}</h1>
<p>{description}</p>
{map}
{summaries}
<h2>{notebook_heading}</h2>
<p><a href="{notebook_url}">{notebook_label}</a></p>
</main>
</body>
</html>
"#,
        page_title = escape_html(&page.page_title),
        css = PAGE_CSS,
        heading = escape_html(&page.heading),
        description = escape_html(&page.description),
        map = generate_map_html(countries, map),
        summaries = render_summaries_html(),
        notebook_heading = escape_html(&page.notebook_heading),
        notebook_url = escape_html(&page.notebook_url),
        notebook_label = escape_html(&page.notebook_label),
    )
}

/// Run the whole pipeline and return the page. Nothing is cached between
/// calls.
pub fn render_page(config: &AtlasConfig) -> Result<String, AtlasError> {
    let map = config.map.to_map_config()?;
    let labeled = load_labeled(config)?;
    let html = assemble_page(&labeled, &config.page, &map);
    info!(bytes = html.len(), "assembled page");
    Ok(html)
}
