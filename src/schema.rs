/// Column and property names shared by the loaders.
/// Single source of truth for both input files.

// ── Assignment table columns ────────────────────────────────────────────────
pub mod assignments {
    pub const COUNTRY: &str = "Country";
    pub const CLUSTER: &str = "cluster";

    pub const ALL: [&str; 2] = [COUNTRY, CLUSTER];
}

// ── Country boundary properties ─────────────────────────────────────────────
pub mod geometry {
    pub const NAME: &str = "NAME";
}

// ── Default input locations ─────────────────────────────────────────────────
pub mod sources {
    pub const ASSIGNMENTS_PATH: &str = "data/processed/constitution_preamble_clustered.csv";
    pub const COUNTRIES_URL: &str = "https://raw.githubusercontent.com/nvkelso/natural-earth-vector/master/geojson/ne_110m_admin_0_countries.geojson";
}
