//! The catalog store: embedded data, startup validation, read accessors.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tracing::info;

use crate::error_handler::CatalogError;
use crate::model::{Party, PartyDetail, PartySummary, Politician, PoliticianProfile};

const PARTIES_JSON: &str = include_str!("../data/parties.json");
const POLITICIANS_JSON: &str = include_str!("../data/politicians.json");

/// Read-only party and politician tables.
///
/// Parties keep their data-file order (the listing endpoint preserves it);
/// politicians are keyed by id. Construction validates that party ids are
/// unique and that every politician reference resolves, so lookups at
/// request time cannot dangle.
#[derive(Debug)]
pub struct Catalog {
    parties: Vec<Party>,
    party_index: HashMap<String, usize>,
    politicians: BTreeMap<String, Politician>,
}

/// Both tables in one serializable view, for the chat prompt context.
#[derive(Serialize)]
struct CatalogContext<'a> {
    parties: &'a [Party],
    politicians: &'a BTreeMap<String, Politician>,
}

impl Catalog {
    /// Builds the catalog from the data embedded in the crate.
    ///
    /// # Errors
    /// Returns [`CatalogError`] if an embedded file fails to parse, a party
    /// id is duplicated, or a politician reference does not resolve. Any of
    /// these means the build shipped bad data and the process must not start.
    pub fn load() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(PARTIES_JSON, POLITICIANS_JSON)?;
        info!(
            parties = catalog.parties.len(),
            politicians = catalog.politicians.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parses and validates a catalog from raw JSON documents.
    ///
    /// Exposed separately from [`Catalog::load`] so validation can be
    /// exercised against data other than the embedded resources.
    pub fn from_json(parties_json: &str, politicians_json: &str) -> Result<Self, CatalogError> {
        let parties: Vec<Party> =
            serde_json::from_str(parties_json).map_err(|source| CatalogError::Parse {
                file: "parties.json",
                source,
            })?;
        let politicians: BTreeMap<String, Politician> = serde_json::from_str(politicians_json)
            .map_err(|source| CatalogError::Parse {
                file: "politicians.json",
                source,
            })?;

        let mut party_index = HashMap::with_capacity(parties.len());
        for (i, party) in parties.iter().enumerate() {
            if party_index.insert(party.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicatePartyId(party.id.clone()));
            }
        }

        for party in &parties {
            for reference in &party.politicians {
                if !politicians.contains_key(&reference.id) {
                    return Err(CatalogError::DanglingPoliticianRef {
                        party_id: party.id.clone(),
                        politician_id: reference.id.clone(),
                    });
                }
            }
        }

        Ok(Self {
            parties,
            party_index,
            politicians,
        })
    }

    /// Reduced projections of every party, in catalog order.
    pub fn summaries(&self) -> Vec<PartySummary> {
        self.parties
            .iter()
            .map(|p| PartySummary {
                id: p.id.clone(),
                name: p.name.clone(),
                logo: p.logo.clone(),
                tagline: p.tagline.clone(),
                status: p.status.clone(),
                lok_sabha_seats: p.lok_sabha_seats.clone(),
                trust_score: p.trust_score.clone(),
            })
            .collect()
    }

    /// Full party record with politician references resolved to profiles.
    ///
    /// Returns `None` when the id is not in the party table.
    pub fn party(&self, id: &str) -> Option<PartyDetail> {
        let party = self.party_index.get(id).map(|&i| &self.parties[i])?;

        let politicians = party
            .politicians
            .iter()
            .map(|r| {
                let photo = self
                    .politicians
                    .get(&r.id)
                    .map(|p| p.photo.clone())
                    .expect("politician references are validated at load");
                PoliticianProfile {
                    id: r.id.clone(),
                    name: r.name.clone(),
                    role: r.role.clone(),
                    photo,
                }
            })
            .collect();

        Some(PartyDetail {
            id: party.id.clone(),
            name: party.name.clone(),
            logo: party.logo.clone(),
            tagline: party.tagline.clone(),
            status: party.status.clone(),
            lok_sabha_seats: party.lok_sabha_seats.clone(),
            trust_score: party.trust_score.clone(),
            history: party.history.clone(),
            core_ideology: party.core_ideology.clone(),
            economic_stance: party.economic_stance.clone(),
            manifesto: party.manifesto.clone(),
            promises: party.promises.clone(),
            politicians,
            social_media: party.social_media.clone(),
        })
    }

    /// Full politician record, or `None` when the id is unknown.
    pub fn politician(&self, id: &str) -> Option<&Politician> {
        self.politicians.get(id)
    }

    /// Serializes both tables as the JSON context block for the chat prompt.
    ///
    /// Recomputed per call; the catalog is small and the chat endpoint is
    /// the only consumer.
    pub fn context_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&CatalogContext {
            parties: &self.parties,
            politicians: &self.politicians,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::load().expect("embedded catalog must load")
    }

    #[test]
    fn embedded_catalog_loads() {
        let c = catalog();
        assert_eq!(c.summaries().len(), 4);
        assert!(c.party("bjp").is_some());
        assert!(c.politician("modi").is_some());
    }

    #[test]
    fn summary_is_a_strict_projection() {
        let c = catalog();
        let summaries = c.summaries();
        assert_eq!(summaries.len(), 4);
        // Listing preserves catalog order.
        assert_eq!(summaries[0].id, "bjp");
        assert_eq!(summaries[3].id, "tmc");

        let value = serde_json::to_value(&summaries[0]).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(|k| k.as_str())
            .collect();
        keys.sort_unstable();
        let mut expected = vec![
            "id",
            "name",
            "logo",
            "tagline",
            "status",
            "lokSabhaSeats",
            "trustScore",
        ];
        expected.sort_unstable();
        assert_eq!(keys, expected);
    }

    #[test]
    fn party_detail_resolves_photos_from_politician_table() {
        let c = catalog();
        for summary in c.summaries() {
            let detail = c.party(&summary.id).unwrap();
            assert!(!detail.politicians.is_empty());
            for profile in &detail.politicians {
                let politician = c.politician(&profile.id).unwrap();
                assert_eq!(profile.photo, politician.photo);
            }
        }
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let c = catalog();
        assert!(c.party("nonexistent").is_none());
        assert!(c.politician("nonexistent").is_none());
    }

    #[test]
    fn politician_record_has_no_id_on_the_wire() {
        let c = catalog();
        let value = serde_json::to_value(c.politician("modi").unwrap()).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("politicalJourney").is_some());
    }

    #[test]
    fn context_json_contains_both_tables() {
        let c = catalog();
        let ctx = c.context_json().unwrap();
        assert!(ctx.contains("\"parties\""));
        assert!(ctx.contains("\"politicians\""));
        assert!(ctx.contains("banerjee"));
    }

    #[test]
    fn dangling_politician_reference_is_rejected() {
        let parties = r#"[{
            "id": "x", "name": "X", "logo": "x.png", "tagline": "t",
            "status": "s", "lokSabhaSeats": "0", "trustScore": "0%",
            "history": [], "coreIdeology": [], "economicStance": [],
            "manifesto": [], "promises": [],
            "politicians": [{ "id": "ghost", "name": "G", "role": "r" }],
            "socialMedia": {}
        }]"#;
        let err = Catalog::from_json(parties, "{}").unwrap_err();
        match err {
            CatalogError::DanglingPoliticianRef {
                party_id,
                politician_id,
            } => {
                assert_eq!(party_id, "x");
                assert_eq!(politician_id, "ghost");
            }
            other => panic!("expected dangling reference error, got {other}"),
        }
    }

    #[test]
    fn duplicate_party_id_is_rejected() {
        let party = r#"{
            "id": "x", "name": "X", "logo": "x.png", "tagline": "t",
            "status": "s", "lokSabhaSeats": "0", "trustScore": "0%",
            "history": [], "coreIdeology": [], "economicStance": [],
            "manifesto": [], "promises": [], "politicians": [],
            "socialMedia": {}
        }"#;
        let parties = format!("[{party},{party}]");
        let err = Catalog::from_json(&parties, "{}").unwrap_err();
        assert!(matches!(err, CatalogError::DuplicatePartyId(id) if id == "x"));
    }
}
