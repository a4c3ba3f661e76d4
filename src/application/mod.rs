//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Query handlers are synchronous over pure domain services; the contact
//! command handler is async because it goes through the `ContactRelay` port.

pub mod handlers;

pub use handlers::{
    // Compatibility
    CompareDrivesHandler, CompareMbtiHandler, CompareMbtiQuery, LookupPairingHandler,
    LookupPairingQuery, MbtiComparison, PairTable, PairingLookup,
    // Contact
    SubmitContactCommand, SubmitContactHandler, SubmitContactResult,
    // Insights
    GetInsightsHandler, GetInsightsQuery, GetInsightsResult,
    // Quiz
    GetQuestionsHandler, GetQuestionsQuery, QuestionSet, QuizKind, QuizOutcome,
    ScoreQuizCommand, ScoreQuizHandler, ScoreQuizResult,
};
