pub mod catalog;
pub mod config;
pub mod error;
pub mod geometry;
mod html;
pub mod labels;
pub mod loader;
pub mod merge;
pub mod page;
pub mod schema;
pub mod summary;
pub mod visualization;

pub use config::AtlasConfig;
pub use error::AtlasError;
pub use labels::ClusterLabel;
pub use page::{assemble_page, load_labeled, render_page};

#[cfg(feature = "python")]
mod python {
    use std::path::PathBuf;

    use pyo3::prelude::*;
    use pyo3::types::PyModule;
    use pyo3_polars::PyDataFrame;

    use crate::config::AtlasConfig;
    use crate::labels::ClusterLabel;
    use crate::{loader, page, schema, summary};

    /// Render the full dashboard page as an HTML string.
    ///
    /// Use with `streamlit.components.v1.html(...)` or
    /// `IPython.display.HTML(...)`.
    #[pyfunction]
    #[pyo3(signature = (assignments=None, geometry=None))]
    fn render_dashboard(assignments: Option<String>, geometry: Option<String>) -> PyResult<String> {
        let mut config = AtlasConfig::default();
        if let Some(path) = assignments {
            config.data.assignments = PathBuf::from(path);
        }
        if let Some(source) = geometry {
            config.data.geometry = source;
        }
        Ok(page::render_page(&config)?)
    }

    /// Load the assignment table (`Country`, `cluster` as Float64).
    #[pyfunction]
    fn load_assignments(path: &str) -> PyResult<PyDataFrame> {
        let df = loader::read_assignments_frame(std::path::Path::new(path))?;
        Ok(PyDataFrame(df))
    }

    /// Cluster labels in canonical order (index = cluster id).
    #[pyfunction]
    fn cluster_labels() -> Vec<&'static str> {
        ClusterLabel::ALL.iter().map(|l| l.as_str()).collect()
    }

    #[pyfunction]
    fn cluster_summaries_text() -> String {
        summary::render_summaries_text()
    }

    fn add_schema_exports(m: &Bound<'_, PyModule>) -> PyResult<()> {
        let assignments = PyModule::new(m.py(), "assignments")?;
        assignments.add("COUNTRY", schema::assignments::COUNTRY)?;
        assignments.add("CLUSTER", schema::assignments::CLUSTER)?;
        m.add_submodule(&assignments)?;

        let geometry = PyModule::new(m.py(), "geometry")?;
        geometry.add("NAME", schema::geometry::NAME)?;
        m.add_submodule(&geometry)?;
        Ok(())
    }

    #[pymodule]
    fn preamble_atlas(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(render_dashboard, m)?)?;
        m.add_function(wrap_pyfunction!(load_assignments, m)?)?;
        m.add_function(wrap_pyfunction!(cluster_labels, m)?)?;
        m.add_function(wrap_pyfunction!(cluster_summaries_text, m)?)?;
        add_schema_exports(m)?;
        Ok(())
    }
}
