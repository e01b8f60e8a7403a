//! Matching service trait.

use super::matching_model::{MatchQuery, MatchResults};
use crate::errors::Result;

/// Trait defining the contract for the matching search.
///
/// The account id is always passed explicitly; the service never reads an
/// ambient request context.
pub trait MatchingServiceTrait: Send + Sync {
    /// Computes the full match set for the caller's account, annotated with
    /// existing leads, ordered deterministically, and paginated in memory.
    fn find_matches(&self, query: &MatchQuery, account_id: &str) -> Result<MatchResults>;
}
