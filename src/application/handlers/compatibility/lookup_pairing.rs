//! LookupPairingHandler - Canned DISC and Enneagram pair profiles.

use serde::Serialize;

use crate::domain::compatibility::{
    communication_alignment, disc_pairing, enneagram_pairing, AlignmentLevel, PairProfile,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::frameworks::{BlendCode, EnneagramProfile};

/// Which pair table to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PairTable {
    Disc,
    Enneagram,
}

#[derive(Debug, Clone)]
pub struct LookupPairingQuery {
    pub table: PairTable,
    pub a: String,
    pub b: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PairingLookup {
    pub table: PairTable,
    /// Keys actually looked up (DISC primaries, Enneagram core numbers).
    pub a: String,
    pub b: String,
    #[serde(flatten)]
    pub pairing: &'static PairProfile,
    /// DISC only, read with `a` as the owner side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication_alignment: Option<AlignmentLevel>,
}

#[derive(Debug, Default)]
pub struct LookupPairingHandler;

impl LookupPairingHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: LookupPairingQuery) -> Result<PairingLookup, DomainError> {
        let (a, b, pairing, alignment) = match query.table {
            PairTable::Disc => {
                let a = query.a.parse::<BlendCode>()?.primary();
                let b = query.b.parse::<BlendCode>()?.primary();
                (
                    a.to_string(),
                    b.to_string(),
                    disc_pairing(a, b),
                    Some(communication_alignment(a, b)),
                )
            }
            PairTable::Enneagram => {
                let a = query.a.parse::<EnneagramProfile>()?.core();
                let b = query.b.parse::<EnneagramProfile>()?.core();
                (a.to_string(), b.to_string(), enneagram_pairing(a, b), None)
            }
        };

        let pairing = pairing.ok_or_else(|| {
            DomainError::new(
                ErrorCode::PairingNotFound,
                format!("No pairing data for {} and {}", a, b),
            )
        })?;

        Ok(PairingLookup {
            table: query.table,
            a,
            b,
            pairing,
            communication_alignment: alignment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(table: PairTable, a: &str, b: &str) -> LookupPairingQuery {
        LookupPairingQuery {
            table,
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    #[test]
    fn disc_blends_reduce_to_primary() {
        let result = LookupPairingHandler::new()
            .handle(query(PairTable::Disc, "D", "Si"))
            .unwrap();
        assert_eq!((result.a.as_str(), result.b.as_str()), ("D", "S"));
        assert_eq!(result.communication_alignment, Some(AlignmentLevel::Low));
    }

    #[test]
    fn enneagram_wings_are_ignored() {
        let result = LookupPairingHandler::new()
            .handle(query(PairTable::Enneagram, "8w7", "9"))
            .unwrap();
        assert_eq!(result.b, "9");
        assert!(result.pairing.chemistry.contains("complementary"));
        assert!(result.communication_alignment.is_none());
    }

    #[test]
    fn invalid_code_is_a_validation_error() {
        let err = LookupPairingHandler::new()
            .handle(query(PairTable::Enneagram, "10", "2"))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfRange);
    }
}
