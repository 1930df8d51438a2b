//! Data model for the party/politician catalog.
//!
//! Wire names are camelCase to match the payloads the frontend consumes
//! (`lokSabhaSeats`, `coreIdeology`, `politicalJourney`, ...). All values
//! are display strings; nothing here is guaranteed numeric.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A dated entry in a party history, political journey, or controversy list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub year: String,
    pub event: String,
}

/// One manifesto section with its icon tag and bullet points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestoSection {
    pub icon: String,
    pub title: String,
    pub points: Vec<String>,
}

/// A tracked campaign promise.
///
/// `status` is an open tag set (`fulfilled`, `in-progress`, ...); the
/// frontend styles by it but nothing in the backend interprets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promise {
    pub status: String,
    pub text: String,
    pub icon: String,
}

/// Reference from a party to a politician, by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoliticianRef {
    pub id: String,
    pub name: String,
    pub role: String,
}

/// Full party record as stored in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub tagline: String,
    pub status: String,
    /// Seat count as a display string, e.g. "303 (2019)".
    pub lok_sabha_seats: String,
    /// Opaque trust-score string, e.g. "75%".
    pub trust_score: String,
    pub history: Vec<TimelineEvent>,
    pub core_ideology: Vec<String>,
    pub economic_stance: Vec<String>,
    pub manifesto: Vec<ManifestoSection>,
    pub promises: Vec<Promise>,
    pub politicians: Vec<PoliticianRef>,
    /// Platform name to URL; keys vary per party.
    pub social_media: BTreeMap<String, String>,
}

/// Degree earned at an institution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
}

/// Parliamentary performance figures, kept as display strings ("N/A" happens).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub attendance: String,
    pub debates: String,
    pub bills: String,
    pub questions: String,
}

/// Full politician record as stored in the catalog.
///
/// The record itself carries no `id` field on the wire; ids key the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Politician {
    pub name: String,
    pub role: String,
    pub photo: String,
    pub bio: String,
    pub political_journey: Vec<TimelineEvent>,
    pub education: Vec<EducationEntry>,
    pub performance: PerformanceRecord,
    pub controversies: Vec<TimelineEvent>,
    pub social_media: BTreeMap<String, String>,
}

/// Reduced party projection returned by the listing endpoint.
///
/// Exactly these fields and no others; the detail view is a separate shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartySummary {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub tagline: String,
    pub status: String,
    pub lok_sabha_seats: String,
    pub trust_score: String,
}

/// A party's politician reference enriched with the resolved photo.
#[derive(Debug, Clone, Serialize)]
pub struct PoliticianProfile {
    pub id: String,
    pub name: String,
    pub role: String,
    pub photo: String,
}

/// Full party record for the detail endpoint, with politician references
/// replaced by [`PoliticianProfile`] entries.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyDetail {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub tagline: String,
    pub status: String,
    pub lok_sabha_seats: String,
    pub trust_score: String,
    pub history: Vec<TimelineEvent>,
    pub core_ideology: Vec<String>,
    pub economic_stance: Vec<String>,
    pub manifesto: Vec<ManifestoSection>,
    pub promises: Vec<Promise>,
    pub politicians: Vec<PoliticianProfile>,
    pub social_media: BTreeMap<String, String>,
}
