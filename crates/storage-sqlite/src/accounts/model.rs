//! Database model for accounts.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use inmoflow_core::accounts::{Account, NewAccount};

/// Database model for accounts.
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::accounts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountDb {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<AccountDb> for Account {
    fn from(db: AccountDb) -> Self {
        Self {
            id: db.id,
            name: db.name,
            is_active: db.is_active,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewAccount> for AccountDb {
    fn from(domain: NewAccount) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            name: domain.name,
            is_active: domain.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}
