use async_trait::async_trait;
use diesel::prelude::*;

use inmoflow_core::constants::CONTACT_TYPE_BUYER;
use inmoflow_core::errors::Result;
use inmoflow_core::leads::{Lead, LeadCreation, LeadRepositoryTrait, NewLead};

use super::model::LeadDb;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::listing_contacts;

/// Repository for managing lead data in the database.
///
/// The duplicate guard in `create_if_absent` relies on the writer actor:
/// check and insert run as one serialized job, so concurrent creations for
/// the same pair cannot both pass the check.
pub struct LeadRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl LeadRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl LeadRepositoryTrait for LeadRepository {
    async fn create_if_absent(&self, new_lead: NewLead) -> Result<LeadCreation> {
        self.writer
            .exec(move |conn| {
                let existing = listing_contacts::table
                    .filter(listing_contacts::account_id.eq(&new_lead.account_id))
                    .filter(listing_contacts::listing_id.eq(&new_lead.listing_id))
                    .filter(listing_contacts::contact_id.eq(&new_lead.contact_id))
                    .filter(listing_contacts::contact_type.eq(&new_lead.contact_type))
                    .select(LeadDb::as_select())
                    .first::<LeadDb>(conn)
                    .optional()
                    .into_core()?;
                if let Some(existing) = existing {
                    return Ok(LeadCreation::Duplicate(existing.into()));
                }

                let mut lead_db: LeadDb = new_lead.into();
                lead_db.id = uuid::Uuid::new_v4().to_string();
                diesel::insert_into(listing_contacts::table)
                    .values(&lead_db)
                    .execute(conn)
                    .into_core()?;

                Ok(LeadCreation::Created(lead_db.into()))
            })
            .await
    }

    async fn delete_buyer_lead(
        &self,
        account_id: &str,
        contact_id: &str,
        listing_id: &str,
    ) -> Result<usize> {
        let account_id = account_id.to_string();
        let contact_id = contact_id.to_string();
        let listing_id = listing_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(
                    listing_contacts::table
                        .filter(listing_contacts::account_id.eq(&account_id))
                        .filter(listing_contacts::contact_id.eq(&contact_id))
                        .filter(listing_contacts::listing_id.eq(&listing_id))
                        .filter(listing_contacts::contact_type.eq(CONTACT_TYPE_BUYER)),
                )
                .execute(conn)
                .into_core()
            })
            .await
    }

    fn find_buyer_lead(
        &self,
        account_id: &str,
        contact_id: &str,
        listing_id: &str,
    ) -> Result<Option<Lead>> {
        let mut conn = get_connection(&self.pool)?;
        let lead_db = listing_contacts::table
            .filter(listing_contacts::account_id.eq(account_id))
            .filter(listing_contacts::contact_id.eq(contact_id))
            .filter(listing_contacts::listing_id.eq(listing_id))
            .filter(listing_contacts::contact_type.eq(CONTACT_TYPE_BUYER))
            .select(LeadDb::as_select())
            .first::<LeadDb>(&mut conn)
            .optional()
            .into_core()?;
        Ok(lead_db.map(Lead::from))
    }

    fn find_buyer_leads_for_pairs(
        &self,
        account_id: &str,
        pairs: &[(String, String)],
    ) -> Result<Vec<Lead>> {
        if pairs.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = get_connection(&self.pool)?;

        // One query over the listing ids of the set; the exact pair filter
        // happens in memory since SQLite has no tuple IN.
        let listing_ids: Vec<&str> = pairs.iter().map(|(_, l)| l.as_str()).collect();
        let rows = listing_contacts::table
            .filter(listing_contacts::account_id.eq(account_id))
            .filter(listing_contacts::contact_type.eq(CONTACT_TYPE_BUYER))
            .filter(listing_contacts::listing_id.eq_any(listing_ids))
            .select(LeadDb::as_select())
            .load::<LeadDb>(&mut conn)
            .into_core()?;

        Ok(rows
            .into_iter()
            .filter(|row| {
                pairs
                    .iter()
                    .any(|(c, l)| c == &row.contact_id && l == &row.listing_id)
            })
            .map(Lead::from)
            .collect())
    }
}
