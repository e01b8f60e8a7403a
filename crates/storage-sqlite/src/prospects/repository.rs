use async_trait::async_trait;
use diesel::prelude::*;

use inmoflow_core::errors::Result;
use inmoflow_core::prospects::{
    NewProspect, Prospect, ProspectRepositoryTrait, ProspectStatus, ProspectUpdate, ProspectView,
};

use super::model::ProspectDb;
use crate::contacts::model::ContactDb;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{contacts, prospects};

/// Repository for managing prospect data in the database.
pub struct ProspectRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl ProspectRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl ProspectRepositoryTrait for ProspectRepository {
    async fn create(&self, new_prospect: NewProspect) -> Result<Prospect> {
        self.writer
            .exec(move |conn| {
                let mut prospect_db: ProspectDb = new_prospect.into();
                prospect_db.id = uuid::Uuid::new_v4().to_string();

                diesel::insert_into(prospects::table)
                    .values(&prospect_db)
                    .execute(conn)
                    .into_core()?;

                prospect_db.into_domain()
            })
            .await
    }

    async fn update(&self, update: ProspectUpdate) -> Result<Prospect> {
        self.writer
            .exec(move |conn| {
                let existing = prospects::table
                    .find(&update.id)
                    .select(ProspectDb::as_select())
                    .first::<ProspectDb>(conn)
                    .into_core()?;

                let prospect_db = ProspectDb::apply_update(existing, update);
                diesel::update(prospects::table.find(&prospect_db.id))
                    .set(&prospect_db)
                    .execute(conn)
                    .into_core()?;

                prospect_db.into_domain()
            })
            .await
    }

    async fn delete(&self, prospect_id: &str) -> Result<usize> {
        let id_owned = prospect_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::delete(prospects::table.find(&id_owned))
                    .execute(conn)
                    .into_core()
            })
            .await
    }

    fn get_by_id(&self, prospect_id: &str) -> Result<Prospect> {
        let mut conn = get_connection(&self.pool)?;
        let prospect_db = prospects::table
            .find(prospect_id)
            .select(ProspectDb::as_select())
            .first::<ProspectDb>(&mut conn)
            .into_core()?;
        prospect_db.into_domain()
    }

    fn get_for_account(&self, prospect_id: &str, account_id: &str) -> Result<Option<Prospect>> {
        let mut conn = get_connection(&self.pool)?;
        let prospect_db = prospects::table
            .find(prospect_id)
            .filter(prospects::account_id.eq(account_id))
            .select(ProspectDb::as_select())
            .first::<ProspectDb>(&mut conn)
            .optional()
            .into_core()?;
        prospect_db.map(ProspectDb::into_domain).transpose()
    }

    fn list_views(
        &self,
        account_id: &str,
        status_filter: Option<ProspectStatus>,
    ) -> Result<Vec<ProspectView>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = prospects::table
            .inner_join(contacts::table)
            .filter(prospects::account_id.eq(account_id))
            .into_boxed();
        if let Some(status) = status_filter {
            query = query.filter(prospects::status.eq(status.as_str()));
        }

        let rows = query
            .select((ProspectDb::as_select(), ContactDb::as_select()))
            .order(prospects::created_at.desc())
            .load::<(ProspectDb, ContactDb)>(&mut conn)
            .into_core()?;

        rows.into_iter()
            .map(|(prospect_db, contact_db)| {
                Ok(ProspectView {
                    prospect: prospect_db.into_domain()?,
                    contact: contact_db.into(),
                })
            })
            .collect()
    }
}
