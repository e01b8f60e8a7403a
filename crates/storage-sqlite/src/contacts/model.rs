//! Database model for contacts.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use inmoflow_core::contacts::{Contact, ContactSummary, NewContact};

/// Database model for contacts.
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::contacts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ContactDb {
    pub id: String,
    pub account_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<ContactDb> for Contact {
    fn from(db: ContactDb) -> Self {
        Self {
            id: db.id,
            account_id: db.account_id,
            name: db.name,
            email: db.email,
            phone: db.phone,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<ContactDb> for ContactSummary {
    fn from(db: ContactDb) -> Self {
        Self {
            id: db.id,
            name: db.name,
            email: db.email,
            phone: db.phone,
        }
    }
}

impl From<NewContact> for ContactDb {
    fn from(domain: NewContact) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            account_id: domain.account_id,
            name: domain.name,
            email: domain.email,
            phone: domain.phone,
            created_at: now,
            updated_at: now,
        }
    }
}
