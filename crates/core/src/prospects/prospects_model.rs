//! Prospect domain models.
//!
//! A prospect captures what a client is looking for: typology, transaction,
//! numeric ranges, preferred areas, and feature minimums. Ranges are open on
//! any null bound; a range with both bounds null means no preference.

use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::contacts::ContactSummary;
use crate::listings::{PropertyType, TransactionType};
use crate::{errors::ValidationError, Error, Result};

/// Prospect lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProspectStatus {
    Active,
    Paused,
    Archived,
}

impl ProspectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProspectStatus::Active => "ACTIVE",
            ProspectStatus::Paused => "PAUSED",
            ProspectStatus::Archived => "ARCHIVED",
        }
    }
}

impl FromStr for ProspectStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(ProspectStatus::Active),
            "PAUSED" => Ok(ProspectStatus::Paused),
            "ARCHIVED" => Ok(ProspectStatus::Archived),
            _ => Err(format!("Unknown prospect status: {}", s)),
        }
    }
}

/// One entry of a prospect's preferred-areas list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferredArea {
    pub neighborhood_id: String,
    pub name: String,
}

/// Feature minimums a prospect requires.
///
/// A prospect never excludes a feature; a `true` flag means the listing must
/// have it, anything else imposes nothing. Stored as a sparse JSON text
/// column and parsed leniently: unparseable or absent input requires nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProspectExtras {
    pub elevator: bool,
    pub garage: bool,
    pub storage_room: bool,
    pub terrace: bool,
}

impl ProspectExtras {
    /// Parses the raw extras column, accepting anything and defaulting to
    /// "no requirements" on malformed input.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|s| serde_json::from_str(s).ok())
            .unwrap_or_default()
    }
}

/// Domain model representing a prospect (demand-side search criteria).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prospect {
    pub id: String,
    pub account_id: String,
    pub contact_id: String,
    pub status: ProspectStatus,
    pub transaction_type: TransactionType,
    pub property_type: PropertyType,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_bedrooms: Option<i32>,
    pub min_bathrooms: Option<Decimal>,
    pub min_area: Option<Decimal>,
    pub max_area: Option<Decimal>,
    pub preferred_areas: Vec<PreferredArea>,
    /// Raw JSON feature minimums; see [`ProspectExtras::parse`].
    pub extras: Option<String>,
    pub urgency: i32,
    pub is_funding_ready: bool,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A prospect joined with its contact, as the matcher consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProspectView {
    pub prospect: Prospect,
    pub contact: ContactSummary,
}

/// Input model for creating a new prospect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProspect {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub account_id: String,
    pub contact_id: String,
    pub status: ProspectStatus,
    pub transaction_type: TransactionType,
    pub property_type: PropertyType,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_bedrooms: Option<i32>,
    pub min_bathrooms: Option<Decimal>,
    pub min_area: Option<Decimal>,
    pub max_area: Option<Decimal>,
    #[serde(default)]
    pub preferred_areas: Vec<PreferredArea>,
    pub extras: Option<String>,
    pub urgency: i32,
    #[serde(default)]
    pub is_funding_ready: bool,
    pub notes: Option<String>,
}

impl NewProspect {
    /// Validates the new prospect data.
    pub fn validate(&self) -> Result<()> {
        if self.contact_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "contactId".to_string(),
            )));
        }
        validate_ranges(
            self.min_price,
            self.max_price,
            self.min_area,
            self.max_area,
            self.urgency,
        )
    }
}

/// Input model for updating an existing prospect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProspectUpdate {
    pub id: String,
    pub status: ProspectStatus,
    pub transaction_type: TransactionType,
    pub property_type: PropertyType,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_bedrooms: Option<i32>,
    pub min_bathrooms: Option<Decimal>,
    pub min_area: Option<Decimal>,
    pub max_area: Option<Decimal>,
    #[serde(default)]
    pub preferred_areas: Vec<PreferredArea>,
    pub extras: Option<String>,
    pub urgency: i32,
    pub is_funding_ready: bool,
    pub notes: Option<String>,
}

impl ProspectUpdate {
    /// Validates the prospect update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        validate_ranges(
            self.min_price,
            self.max_price,
            self.min_area,
            self.max_area,
            self.urgency,
        )
    }
}

fn validate_ranges(
    min_price: Option<Decimal>,
    max_price: Option<Decimal>,
    min_area: Option<Decimal>,
    max_area: Option<Decimal>,
    urgency: i32,
) -> Result<()> {
    if let (Some(min), Some(max)) = (min_price, max_price) {
        if min > max {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Minimum price cannot exceed maximum price".to_string(),
            )));
        }
    }
    if let (Some(min), Some(max)) = (min_area, max_area) {
        if min > max {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Minimum area cannot exceed maximum area".to_string(),
            )));
        }
    }
    if !(1..=3).contains(&urgency) {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Urgency must be between 1 and 3".to_string(),
        )));
    }
    Ok(())
}
