//! Matching module - prospect-to-listing search.
//!
//! # Architecture
//!
//! ```text
//! MatchQuery → MatchingService → ProspectRepository ─┐
//!                              → ListingRepository  ─┤ bulk reads
//!                              → LeadRepository     ─┘
//!                     │
//!                     ▼
//!              engine::evaluate_pair   (pure eligibility + classification)
//!                     │
//!                     ▼
//!              MatchResults (annotated, ordered, paginated)
//! ```
//!
//! The engine (`matching_engine.rs`) is free of I/O and holds every
//! constraint rule: type compatibility, tolerance bands, location and
//! feature minimums. The service layers candidate retrieval, filter
//! predicates, lead annotation, and pagination on top of it.

mod matching_engine;
mod matching_model;
mod matching_service;
mod matching_traits;

pub use matching_engine::{evaluate_pair, PairEvaluation};
pub use matching_model::{
    AccountScope, ExistingLeadSummary, ListingSnapshot, MatchFilters, MatchQuery, MatchResults,
    MatchType, Pagination, ProspectMatch, ProspectSnapshot,
};
pub use matching_service::MatchingService;
pub use matching_traits::MatchingServiceTrait;
