//! Database model for prospects.
//!
//! Decimal ranges are stored as text columns; preferred areas and extras as
//! JSON text. Enum columns are parsed strictly when loading.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use inmoflow_core::errors::Result;
use inmoflow_core::prospects::{NewProspect, Prospect, ProspectUpdate};

use crate::utils::{decimal_from_text, decimal_to_text, parse_enum};

/// Database model for prospects.
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::prospects)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct ProspectDb {
    pub id: String,
    pub account_id: String,
    pub contact_id: String,
    pub status: String,
    pub transaction_type: String,
    pub property_type: String,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub min_bedrooms: Option<i32>,
    pub min_bathrooms: Option<String>,
    pub min_area: Option<String>,
    pub max_area: Option<String>,
    pub preferred_areas: Option<String>,
    pub extras: Option<String>,
    pub urgency: i32,
    pub is_funding_ready: bool,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ProspectDb {
    /// Converts the row into the domain model. Enum columns are validated;
    /// the JSON columns degrade leniently (malformed preferred areas become
    /// an empty list, extras stay raw for the engine's lenient parse).
    pub fn into_domain(self) -> Result<Prospect> {
        Ok(Prospect {
            status: parse_enum(&self.status)?,
            transaction_type: parse_enum(&self.transaction_type)?,
            property_type: parse_enum(&self.property_type)?,
            min_price: decimal_from_text(self.min_price),
            max_price: decimal_from_text(self.max_price),
            min_bedrooms: self.min_bedrooms,
            min_bathrooms: decimal_from_text(self.min_bathrooms),
            min_area: decimal_from_text(self.min_area),
            max_area: decimal_from_text(self.max_area),
            preferred_areas: self
                .preferred_areas
                .as_deref()
                .and_then(|s| serde_json::from_str(s).ok())
                .unwrap_or_default(),
            extras: self.extras,
            urgency: self.urgency,
            is_funding_ready: self.is_funding_ready,
            notes: self.notes,
            id: self.id,
            account_id: self.account_id,
            contact_id: self.contact_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl From<NewProspect> for ProspectDb {
    fn from(domain: NewProspect) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            account_id: domain.account_id,
            contact_id: domain.contact_id,
            status: domain.status.as_str().to_string(),
            transaction_type: domain.transaction_type.as_str().to_string(),
            property_type: domain.property_type.as_str().to_string(),
            min_price: decimal_to_text(domain.min_price),
            max_price: decimal_to_text(domain.max_price),
            min_bedrooms: domain.min_bedrooms,
            min_bathrooms: decimal_to_text(domain.min_bathrooms),
            min_area: decimal_to_text(domain.min_area),
            max_area: decimal_to_text(domain.max_area),
            preferred_areas: areas_to_text(&domain.preferred_areas),
            extras: domain.extras,
            urgency: domain.urgency,
            is_funding_ready: domain.is_funding_ready,
            notes: domain.notes,
            created_at: now,
            updated_at: now,
        }
    }
}

impl ProspectDb {
    /// Applies an update on top of an existing row, preserving identity and
    /// creation metadata.
    pub fn apply_update(existing: ProspectDb, update: ProspectUpdate) -> Self {
        Self {
            id: existing.id,
            account_id: existing.account_id,
            contact_id: existing.contact_id,
            status: update.status.as_str().to_string(),
            transaction_type: update.transaction_type.as_str().to_string(),
            property_type: update.property_type.as_str().to_string(),
            min_price: decimal_to_text(update.min_price),
            max_price: decimal_to_text(update.max_price),
            min_bedrooms: update.min_bedrooms,
            min_bathrooms: decimal_to_text(update.min_bathrooms),
            min_area: decimal_to_text(update.min_area),
            max_area: decimal_to_text(update.max_area),
            preferred_areas: areas_to_text(&update.preferred_areas),
            extras: update.extras,
            urgency: update.urgency,
            is_funding_ready: update.is_funding_ready,
            notes: update.notes,
            created_at: existing.created_at,
            updated_at: chrono::Utc::now().naive_utc(),
        }
    }
}

fn areas_to_text(areas: &[inmoflow_core::prospects::PreferredArea]) -> Option<String> {
    if areas.is_empty() {
        None
    } else {
        serde_json::to_string(areas).ok()
    }
}
