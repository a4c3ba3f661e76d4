//! Compatibility handlers.

mod compare_drives;
mod compare_mbti;
mod lookup_pairing;

pub use compare_drives::CompareDrivesHandler;
pub use compare_mbti::{CompareMbtiHandler, CompareMbtiQuery, MbtiComparison};
pub use lookup_pairing::{LookupPairingHandler, LookupPairingQuery, PairTable, PairingLookup};
