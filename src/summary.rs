/// Cluster summaries, as HTML for the page and as plain text for the terminal.
use crate::catalog::{ClusterMetadata, CLUSTER_METADATA};
use crate::html::escape_html;

pub const SECTION_TITLE: &str = "Cluster Summaries";
pub const SAMPLE_COUNTRIES: &str = "Sample Countries";
pub const INTERPRETATION: &str = "Interpretation";

/// Records in presentation order.
pub fn summaries() -> impl Iterator<Item = &'static ClusterMetadata> {
    CLUSTER_METADATA.iter()
}

pub fn render_summaries_html() -> String {
    let mut html = format!("<h2>{}</h2>\n", SECTION_TITLE);
    for meta in summaries() {
        html.push_str(&format!(
            "<section class=\"cluster-summary\">\n  <h3>{label}</h3>\n  <p><strong>{SAMPLE_COUNTRIES}:</strong> {samples}</p>\n  <p><strong>{INTERPRETATION}:</strong> {interpretation}</p>\n</section>\n",
            label = escape_html(meta.label.as_str()),
            samples = escape_html(meta.sample_countries),
            interpretation = escape_html(meta.interpretation),
        ));
    }
    html
}

pub fn render_summaries_text() -> String {
    let mut text = format!("{}\n{}\n", SECTION_TITLE, "=".repeat(SECTION_TITLE.len()));
    for meta in summaries() {
        text.push_str(&format!(
            "\n{label}\n{underline}\n{SAMPLE_COUNTRIES}: {samples}\n{INTERPRETATION}: {interpretation}\n",
            label = meta.label,
            underline = "-".repeat(meta.label.as_str().chars().count()),
            samples = meta.sample_countries,
            interpretation = meta.interpretation,
        ));
    }
    text
}
