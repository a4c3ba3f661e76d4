//! Application handlers.
//!
//! Query and command handlers that orchestrate domain operations and ports.

pub mod compatibility;
pub mod contact;
pub mod insights;
pub mod quiz;

pub use compatibility::{
    CompareDrivesHandler, CompareMbtiHandler, CompareMbtiQuery, LookupPairingHandler,
    LookupPairingQuery, MbtiComparison, PairTable, PairingLookup,
};
pub use contact::{SubmitContactCommand, SubmitContactHandler, SubmitContactResult};
pub use insights::{GetInsightsHandler, GetInsightsQuery, GetInsightsResult};
pub use quiz::{
    GetQuestionsHandler, GetQuestionsQuery, QuestionSet, QuizKind, QuizOutcome,
    ScoreQuizCommand, ScoreQuizHandler, ScoreQuizResult,
};
