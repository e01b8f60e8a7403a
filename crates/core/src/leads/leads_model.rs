//! Lead domain models.
//!
//! A lead is a `listing_contacts` row with contact type `"buyer"`: the one
//! artifact of the matching flow that survives across requests. Statuses and
//! sources are CRM vocabulary, kept as strings.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain model representing a contact attached to a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub account_id: String,
    pub listing_id: String,
    pub contact_id: String,
    pub contact_type: String,
    pub status: String,
    pub source: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new lead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub account_id: String,
    pub listing_id: String,
    pub contact_id: String,
    pub contact_type: String,
    pub status: String,
    pub source: String,
}

/// Result of a duplicate-guarded lead insert.
///
/// The check and the insert run as one job on the writer actor, so two
/// concurrent creations for the same pair cannot both observe "absent".
#[derive(Debug, Clone)]
pub enum LeadCreation {
    Created(Lead),
    Duplicate(Lead),
}

/// Structured outcome of a lead action.
///
/// Business-rule violations (duplicate lead, nothing to dismiss, foreign
/// prospect) are reported through this shape, never as errors; callers check
/// `success`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadActionOutcome {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<String>,
}

impl LeadActionOutcome {
    pub fn ok(message: impl Into<String>, lead_id: Option<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            lead_id,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            lead_id: None,
        }
    }
}
