//! Read-only catalog of parties and politicians.
//!
//! The catalog is built once at process start from literal data embedded in
//! the crate, validated, and never mutated afterwards. Everything the HTTP
//! layer serves comes from the accessors on [`Catalog`]:
//!
//! - [`Catalog::summaries`]  — reduced party projections for listings
//! - [`Catalog::party`]      — full party record with resolved politician photos
//! - [`Catalog::politician`] — full politician record
//! - [`Catalog::context_json`] — both tables serialized for the chat prompt

mod error_handler;
mod model;
mod store;

pub use error_handler::CatalogError;
pub use model::{
    EducationEntry, ManifestoSection, Party, PartyDetail, PartySummary, PerformanceRecord,
    Politician, PoliticianProfile, PoliticianRef, Promise, TimelineEvent,
};
pub use store::Catalog;
