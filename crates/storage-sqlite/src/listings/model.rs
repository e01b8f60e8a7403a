//! Database models for listings, properties, and neighborhoods.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use inmoflow_core::errors::Result;
use inmoflow_core::listings::{
    Listing, ListingUpdate, ListingView, Location, NewListing, Property,
};

use crate::utils::{decimal_from_text, decimal_to_text, parse_enum};

/// Database model for the transactional half of a listing.
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::listings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct ListingDb {
    pub id: String,
    pub account_id: String,
    pub property_id: String,
    pub listing_type: String,
    pub price: Option<String>,
    pub status: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ListingDb {
    pub fn into_domain(self) -> Result<Listing> {
        Ok(Listing {
            listing_type: parse_enum(&self.listing_type)?,
            status: parse_enum(&self.status)?,
            price: decimal_from_text(self.price),
            id: self.id,
            account_id: self.account_id,
            property_id: self.property_id,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Database model for the physical half of a listing.
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::properties)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct PropertyDb {
    pub id: String,
    pub property_type: String,
    pub title: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<String>,
    pub square_meter: Option<String>,
    pub built_surface_area: Option<String>,
    pub neighborhood_id: Option<String>,
    pub has_elevator: bool,
    pub has_garage: bool,
    pub has_storage_room: bool,
    pub has_terrace: bool,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub description: Option<String>,
    pub construction_year: Option<i32>,
    pub image_count: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl PropertyDb {
    pub fn into_domain(self) -> Result<Property> {
        Ok(Property {
            property_type: parse_enum(&self.property_type)?,
            bathrooms: decimal_from_text(self.bathrooms),
            square_meter: decimal_from_text(self.square_meter),
            built_surface_area: decimal_from_text(self.built_surface_area),
            id: self.id,
            title: self.title,
            bedrooms: self.bedrooms,
            neighborhood_id: self.neighborhood_id,
            has_elevator: self.has_elevator,
            has_garage: self.has_garage,
            has_storage_room: self.has_storage_room,
            has_terrace: self.has_terrace,
            street: self.street,
            city: self.city,
            province: self.province,
            postal_code: self.postal_code,
            description: self.description,
            construction_year: self.construction_year,
            image_count: self.image_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Database model for neighborhoods.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::neighborhoods)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NeighborhoodDb {
    pub id: String,
    pub name: String,
    pub municipality: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
}

impl From<NeighborhoodDb> for Location {
    fn from(db: NeighborhoodDb) -> Self {
        Self {
            neighborhood_id: db.id,
            neighborhood: db.name,
            municipality: db.municipality,
            city: db.city,
            province: db.province,
        }
    }
}

/// Assembles a joined row into the domain view.
pub(crate) fn view_from_row(
    listing: ListingDb,
    property: PropertyDb,
    neighborhood: Option<NeighborhoodDb>,
) -> Result<ListingView> {
    Ok(ListingView {
        listing: listing.into_domain()?,
        property: property.into_domain()?,
        location: neighborhood.map(Location::from),
    })
}

/// Splits a [`NewListing`] into its two freshly-identified rows.
pub(crate) fn rows_from_new(new_listing: NewListing) -> (ListingDb, PropertyDb) {
    let now = chrono::Utc::now().naive_utc();
    let property_id = uuid::Uuid::new_v4().to_string();
    let listing_id = new_listing
        .id
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let property = PropertyDb {
        id: property_id.clone(),
        property_type: new_listing.property_type.as_str().to_string(),
        title: new_listing.title,
        bedrooms: new_listing.bedrooms,
        bathrooms: decimal_to_text(new_listing.bathrooms),
        square_meter: decimal_to_text(new_listing.square_meter),
        built_surface_area: decimal_to_text(new_listing.built_surface_area),
        neighborhood_id: new_listing.neighborhood_id,
        has_elevator: new_listing.has_elevator,
        has_garage: new_listing.has_garage,
        has_storage_room: new_listing.has_storage_room,
        has_terrace: new_listing.has_terrace,
        street: new_listing.street,
        city: new_listing.city,
        province: new_listing.province,
        postal_code: new_listing.postal_code,
        description: new_listing.description,
        construction_year: new_listing.construction_year,
        image_count: new_listing.image_count,
        created_at: now,
        updated_at: now,
    };
    let listing = ListingDb {
        id: listing_id,
        account_id: new_listing.account_id,
        property_id,
        listing_type: new_listing.listing_type.as_str().to_string(),
        price: decimal_to_text(new_listing.price),
        status: new_listing.status.as_str().to_string(),
        is_active: new_listing.is_active,
        created_at: now,
        updated_at: now,
    };
    (listing, property)
}

/// Applies a [`ListingUpdate`] on top of the existing pair of rows.
pub(crate) fn rows_from_update(
    existing_listing: ListingDb,
    existing_property: PropertyDb,
    update: ListingUpdate,
) -> (ListingDb, PropertyDb) {
    let now = chrono::Utc::now().naive_utc();

    let listing = ListingDb {
        listing_type: update.listing_type.as_str().to_string(),
        price: decimal_to_text(update.price),
        status: update.status.as_str().to_string(),
        is_active: update.is_active,
        updated_at: now,
        ..existing_listing
    };
    let property = PropertyDb {
        title: update.title,
        bedrooms: update.bedrooms,
        bathrooms: decimal_to_text(update.bathrooms),
        square_meter: decimal_to_text(update.square_meter),
        built_surface_area: decimal_to_text(update.built_surface_area),
        neighborhood_id: update.neighborhood_id,
        has_elevator: update.has_elevator,
        has_garage: update.has_garage,
        has_storage_room: update.has_storage_room,
        has_terrace: update.has_terrace,
        street: update.street,
        city: update.city,
        province: update.province,
        postal_code: update.postal_code,
        description: update.description,
        construction_year: update.construction_year,
        image_count: update.image_count,
        updated_at: now,
        ..existing_property
    };
    (listing, property)
}
