//! Errors raised while building the catalog.
//!
//! All of these are startup conditions: the embedded data is parsed and
//! validated once, before the server binds, and a failure here is fatal.

use thiserror::Error;

/// Errors from parsing or validating the embedded catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An embedded data file is not valid JSON for its expected shape.
    #[error("failed to parse embedded {file}: {source}")]
    Parse {
        /// Which embedded resource failed (e.g. `parties.json`).
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Two party records share an id.
    #[error("duplicate party id in embedded data: {0}")]
    DuplicatePartyId(String),

    /// A party references a politician id that is not in the politician table.
    #[error("party '{party_id}' references unknown politician '{politician_id}'")]
    DanglingPoliticianRef {
        party_id: String,
        politician_id: String,
    },
}
