//! Profile Compass - Cross-framework personality compatibility engine
//!
//! Compares a visitor's MBTI, DISC, Enneagram, ProScan and Instinctive
//! Drives results against a fixed owner profile and produces scores,
//! narrative, and collaboration insights, served over a JSON API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
