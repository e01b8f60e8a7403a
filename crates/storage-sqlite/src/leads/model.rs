//! Database model for listing contacts (leads).

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use inmoflow_core::leads::{Lead, NewLead};

/// Database model for the `listing_contacts` table.
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::listing_contacts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LeadDb {
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

impl From<LeadDb> for Lead {
    fn from(db: LeadDb) -> Self {
        Self {
            id: db.id,
            account_id: db.account_id,
            listing_id: db.listing_id,
            contact_id: db.contact_id,
            contact_type: db.contact_type,
            status: db.status,
            source: db.source,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewLead> for LeadDb {
    fn from(domain: NewLead) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            account_id: domain.account_id,
            listing_id: domain.listing_id,
            contact_id: domain.contact_id,
            contact_type: domain.contact_type,
            status: domain.status,
            source: domain.source,
            created_at: now,
            updated_at: now,
        }
    }
}
