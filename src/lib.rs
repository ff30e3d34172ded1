//! Make/Buy/Partner - strategy exercise backend
//!
//! Learners take a stance on a sourcing decision, work through six strategy
//! frameworks and compare their instinct with the blended recommendation.
//! An AI coach frames scenarios, gives hints and feedback; when it is
//! unavailable the deterministic scoring and feedback take over.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
