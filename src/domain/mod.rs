//! Domain layer containing the personality engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (percentage, state machine, errors)
//! - `frameworks` - Type registries and visitor/owner profiles
//! - `compatibility` - Pairwise scores, tables, and generated narrative
//! - `insights` - Collaboration-dimension insight assembly
//! - `quiz` - Self-assessment question banks and scorers
//! - `chart` - Radial chart geometry for the DISC circle and MBTI wheel
//! - `contact` - Contact form message and status lifecycle

pub mod chart;
pub mod compatibility;
pub mod contact;
pub mod foundation;
pub mod frameworks;
pub mod insights;
pub mod quiz;
