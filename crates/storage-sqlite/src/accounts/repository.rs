use async_trait::async_trait;
use diesel::prelude::*;

use inmoflow_core::accounts::{Account, AccountRepositoryTrait, NewAccount};
use inmoflow_core::errors::Result;

use super::model::AccountDb;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::accounts;

/// Repository for managing account data in the database.
pub struct AccountRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl AccountRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl AccountRepositoryTrait for AccountRepository {
    async fn create(&self, new_account: NewAccount) -> Result<Account> {
        new_account.validate()?;
        self.writer
            .exec(move |conn| {
                let mut account_db: AccountDb = new_account.into();
                account_db.id = uuid::Uuid::new_v4().to_string();

                diesel::insert_into(accounts::table)
                    .values(&account_db)
                    .execute(conn)
                    .into_core()?;

                Ok(account_db.into())
            })
            .await
    }

    fn get_by_id(&self, account_id: &str) -> Result<Account> {
        let mut conn = get_connection(&self.pool)?;
        let account = accounts::table
            .find(account_id)
            .select(AccountDb::as_select())
            .first::<AccountDb>(&mut conn)
            .into_core()?;
        Ok(account.into())
    }

    fn list(&self, is_active_filter: Option<bool>) -> Result<Vec<Account>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = accounts::table.into_boxed();
        if let Some(active) = is_active_filter {
            query = query.filter(accounts::is_active.eq(active));
        }

        let results = query
            .select(AccountDb::as_select())
            .order(accounts::name.asc())
            .load::<AccountDb>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(Account::from).collect())
    }
}
