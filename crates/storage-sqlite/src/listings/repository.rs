use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use inmoflow_core::errors::Result;
use inmoflow_core::listings::{
    Listing, ListingRepositoryTrait, ListingStatus, ListingUpdate, ListingView, NewListing,
};

use super::model::{
    rows_from_new, rows_from_update, view_from_row, ListingDb, NeighborhoodDb, PropertyDb,
};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{listings, neighborhoods, properties};

/// Repository for managing listing and property data in the database.
///
/// The candidate query joins listings, properties, and neighborhoods in one
/// round-trip; the matcher never fetches per pair.
pub struct ListingRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl ListingRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

type JoinedRow = (ListingDb, (PropertyDb, Option<NeighborhoodDb>));

fn load_view(conn: &mut SqliteConnection, listing_id: &str) -> Result<ListingView> {
    let (listing, (property, neighborhood)) = listings::table
        .inner_join(properties::table.left_join(neighborhoods::table))
        .filter(listings::id.eq(listing_id))
        .select((
            ListingDb::as_select(),
            (PropertyDb::as_select(), Option::<NeighborhoodDb>::as_select()),
        ))
        .first::<JoinedRow>(conn)
        .into_core()?;
    view_from_row(listing, property, neighborhood)
}

fn rows_to_views(rows: Vec<JoinedRow>) -> Result<Vec<ListingView>> {
    rows.into_iter()
        .map(|(listing, (property, neighborhood))| view_from_row(listing, property, neighborhood))
        .collect()
}

#[async_trait]
impl ListingRepositoryTrait for ListingRepository {
    async fn create(&self, new_listing: NewListing) -> Result<ListingView> {
        self.writer
            .exec(move |conn| {
                let (listing_db, property_db) = rows_from_new(new_listing);

                diesel::insert_into(properties::table)
                    .values(&property_db)
                    .execute(conn)
                    .into_core()?;
                diesel::insert_into(listings::table)
                    .values(&listing_db)
                    .execute(conn)
                    .into_core()?;

                load_view(conn, &listing_db.id)
            })
            .await
    }

    async fn update(&self, update: ListingUpdate) -> Result<ListingView> {
        self.writer
            .exec(move |conn| {
                let existing_listing = listings::table
                    .find(&update.id)
                    .select(ListingDb::as_select())
                    .first::<ListingDb>(conn)
                    .into_core()?;
                let existing_property = properties::table
                    .find(&existing_listing.property_id)
                    .select(PropertyDb::as_select())
                    .first::<PropertyDb>(conn)
                    .into_core()?;

                let (listing_db, property_db) =
                    rows_from_update(existing_listing, existing_property, update);

                diesel::update(properties::table.find(&property_db.id))
                    .set(&property_db)
                    .execute(conn)
                    .into_core()?;
                diesel::update(listings::table.find(&listing_db.id))
                    .set(&listing_db)
                    .execute(conn)
                    .into_core()?;

                load_view(conn, &listing_db.id)
            })
            .await
    }

    async fn set_status(&self, listing_id: &str, status: ListingStatus) -> Result<Listing> {
        let id_owned = listing_id.to_string();
        self.writer
            .exec(move |conn| {
                diesel::update(listings::table.find(&id_owned))
                    .set((
                        listings::status.eq(status.as_str()),
                        listings::updated_at.eq(chrono::Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;

                let listing_db = listings::table
                    .find(&id_owned)
                    .select(ListingDb::as_select())
                    .first::<ListingDb>(conn)
                    .into_core()?;
                listing_db.into_domain()
            })
            .await
    }

    async fn delete(&self, listing_id: &str) -> Result<usize> {
        let id_owned = listing_id.to_string();
        self.writer
            .exec(move |conn| {
                let listing_db = listings::table
                    .find(&id_owned)
                    .select(ListingDb::as_select())
                    .first::<ListingDb>(conn)
                    .into_core()?;

                let deleted = diesel::delete(listings::table.find(&id_owned))
                    .execute(conn)
                    .into_core()?;
                diesel::delete(properties::table.find(&listing_db.property_id))
                    .execute(conn)
                    .into_core()?;
                Ok(deleted)
            })
            .await
    }

    fn get_view(&self, listing_id: &str) -> Result<ListingView> {
        let mut conn = get_connection(&self.pool)?;
        load_view(&mut conn, listing_id)
    }

    fn list_views(
        &self,
        account_id: &str,
        is_active_filter: Option<bool>,
        statuses: Option<&[ListingStatus]>,
    ) -> Result<Vec<ListingView>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = listings::table
            .inner_join(properties::table.left_join(neighborhoods::table))
            .filter(listings::account_id.eq(account_id))
            .into_boxed();
        if let Some(active) = is_active_filter {
            query = query.filter(listings::is_active.eq(active));
        }
        if let Some(statuses) = statuses {
            let values: Vec<&str> = statuses.iter().map(|s| s.as_str()).collect();
            query = query.filter(listings::status.eq_any(values));
        }

        let rows = query
            .select((
                ListingDb::as_select(),
                (PropertyDb::as_select(), Option::<NeighborhoodDb>::as_select()),
            ))
            .order((listings::created_at.desc(), listings::id.asc()))
            .load::<JoinedRow>(&mut conn)
            .into_core()?;
        rows_to_views(rows)
    }

    fn list_candidates(&self, account_id: &str, cross_account: bool) -> Result<Vec<ListingView>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = listings::table
            .inner_join(properties::table.left_join(neighborhoods::table))
            .filter(listings::is_active.eq(true))
            .filter(listings::status.ne(ListingStatus::Draft.as_str()))
            .into_boxed();
        if !cross_account {
            query = query.filter(listings::account_id.eq(account_id));
        }

        let rows = query
            .select((
                ListingDb::as_select(),
                (PropertyDb::as_select(), Option::<NeighborhoodDb>::as_select()),
            ))
            .order((listings::created_at.asc(), listings::id.asc()))
            .load::<JoinedRow>(&mut conn)
            .into_core()?;
        rows_to_views(rows)
    }
}
