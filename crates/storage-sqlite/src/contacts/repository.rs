use async_trait::async_trait;
use diesel::prelude::*;

use inmoflow_core::contacts::{Contact, ContactRepositoryTrait, NewContact};
use inmoflow_core::errors::Result;

use super::model::ContactDb;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::contacts;

/// Repository for managing contact data in the database.
pub struct ContactRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl ContactRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl ContactRepositoryTrait for ContactRepository {
    async fn create(&self, new_contact: NewContact) -> Result<Contact> {
        new_contact.validate()?;
        self.writer
            .exec(move |conn| {
                let mut contact_db: ContactDb = new_contact.into();
                contact_db.id = uuid::Uuid::new_v4().to_string();

                diesel::insert_into(contacts::table)
                    .values(&contact_db)
                    .execute(conn)
                    .into_core()?;

                Ok(contact_db.into())
            })
            .await
    }

    fn get_by_id(&self, contact_id: &str) -> Result<Contact> {
        let mut conn = get_connection(&self.pool)?;
        let contact = contacts::table
            .find(contact_id)
            .select(ContactDb::as_select())
            .first::<ContactDb>(&mut conn)
            .into_core()?;
        Ok(contact.into())
    }

    fn list_by_account(&self, account_id: &str) -> Result<Vec<Contact>> {
        let mut conn = get_connection(&self.pool)?;
        let results = contacts::table
            .filter(contacts::account_id.eq(account_id))
            .select(ContactDb::as_select())
            .order(contacts::name.asc())
            .load::<ContactDb>(&mut conn)
            .into_core()?;
        Ok(results.into_iter().map(Contact::from).collect())
    }
}
