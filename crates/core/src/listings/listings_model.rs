//! Listing domain models.
//!
//! A listing is the transactional half of a supply-side record (price,
//! transaction type, status, tenant); it is joined 1:1 with a [`Property`]
//! (the physical half) and optionally with a [`Location`]. The flattened
//! [`ListingFields`] view feeds the completion tracker.

use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Transaction offered on a listing or wanted by a prospect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Sale,
    Rent,
    RentWithOption,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Sale => "SALE",
            TransactionType::Rent => "RENT",
            TransactionType::RentWithOption => "RENT_WITH_OPTION",
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "SALE" => Ok(TransactionType::Sale),
            "RENT" => Ok(TransactionType::Rent),
            "RENT_WITH_OPTION" => Ok(TransactionType::RentWithOption),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

/// Property typology. The Spanish market vocabulary is kept as-is since it
/// is what agencies, portals, and the rule table all speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    /// Apartment / flat.
    Piso,
    /// House.
    Casa,
    /// Commercial space.
    Local,
    /// Garage / parking spot.
    Garaje,
    /// Land plot.
    Solar,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Piso => "piso",
            PropertyType::Casa => "casa",
            PropertyType::Local => "local",
            PropertyType::Garaje => "garaje",
            PropertyType::Solar => "solar",
        }
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "piso" => Ok(PropertyType::Piso),
            "casa" => Ok(PropertyType::Casa),
            "local" => Ok(PropertyType::Local),
            "garaje" => Ok(PropertyType::Garaje),
            "solar" => Ok(PropertyType::Solar),
            _ => Err(format!("Unknown property type: {}", s)),
        }
    }
}

/// Listing lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingStatus {
    Draft,
    Published,
    Reserved,
    Sold,
    Rented,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Draft => "DRAFT",
            ListingStatus::Published => "PUBLISHED",
            ListingStatus::Reserved => "RESERVED",
            ListingStatus::Sold => "SOLD",
            ListingStatus::Rented => "RENTED",
        }
    }
}

impl FromStr for ListingStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(ListingStatus::Draft),
            "PUBLISHED" => Ok(ListingStatus::Published),
            "RESERVED" => Ok(ListingStatus::Reserved),
            "SOLD" => Ok(ListingStatus::Sold),
            "RENTED" => Ok(ListingStatus::Rented),
            _ => Err(format!("Unknown listing status: {}", s)),
        }
    }
}

/// Transactional half of a supply-side record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub account_id: String,
    pub property_id: String,
    pub listing_type: TransactionType,
    pub price: Option<Decimal>,
    pub status: ListingStatus,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Physical half of a supply-side record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub property_type: PropertyType,
    pub title: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<Decimal>,
    pub square_meter: Option<Decimal>,
    pub built_surface_area: Option<Decimal>,
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

/// Resolved location of a property's neighborhood.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub neighborhood_id: String,
    pub neighborhood: String,
    pub municipality: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
}

/// A listing joined with its property and resolved location.
///
/// This is the shape the matcher and the completion tracker consume. The
/// candidate query in the storage layer produces it in one round-trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingView {
    pub listing: Listing,
    pub property: Property,
    pub location: Option<Location>,
}

impl ListingView {
    /// Flattens the joined record into the field set the completion rule
    /// table validates.
    pub fn to_fields(&self) -> ListingFields {
        ListingFields {
            property_type: self.property.property_type,
            listing_type: Some(self.listing.listing_type),
            price: self.listing.price,
            street: self.property.street.clone(),
            city: self.property.city.clone(),
            province: self.property.province.clone(),
            postal_code: self.property.postal_code.clone(),
            description: self.property.description.clone(),
            image_count: self.property.image_count,
            square_meter: self.property.square_meter,
            built_surface_area: self.property.built_surface_area,
            bedrooms: self.property.bedrooms,
            bathrooms: self.property.bathrooms,
            title: self.property.title.clone(),
            construction_year: self.property.construction_year,
            has_elevator: self.property.has_elevator,
            has_garage: self.property.has_garage,
            has_storage_room: self.property.has_storage_room,
            has_terrace: self.property.has_terrace,
        }
    }
}

/// Flattened field set evaluated by the completion rule table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingFields {
    pub property_type: PropertyType,
    pub listing_type: Option<TransactionType>,
    pub price: Option<Decimal>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub description: Option<String>,
    pub image_count: i32,
    pub square_meter: Option<Decimal>,
    pub built_surface_area: Option<Decimal>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<Decimal>,
    pub title: Option<String>,
    pub construction_year: Option<i32>,
    pub has_elevator: bool,
    pub has_garage: bool,
    pub has_storage_room: bool,
    pub has_terrace: bool,
}

/// Input model for creating a listing together with its property.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub account_id: String,
    pub listing_type: TransactionType,
    pub price: Option<Decimal>,
    pub status: ListingStatus,
    pub is_active: bool,
    pub property_type: PropertyType,
    pub title: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<Decimal>,
    pub square_meter: Option<Decimal>,
    pub built_surface_area: Option<Decimal>,
    pub neighborhood_id: Option<String>,
    #[serde(default)]
    pub has_elevator: bool,
    #[serde(default)]
    pub has_garage: bool,
    #[serde(default)]
    pub has_storage_room: bool,
    #[serde(default)]
    pub has_terrace: bool,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub description: Option<String>,
    pub construction_year: Option<i32>,
    #[serde(default)]
    pub image_count: i32,
}

impl NewListing {
    /// Validates the new listing data.
    pub fn validate(&self) -> Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "accountId".to_string(),
            )));
        }
        if let Some(price) = self.price {
            if price < Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Price cannot be negative".to_string(),
                )));
            }
        }
        if self.image_count < 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Image count cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for updating a listing and its property.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingUpdate {
    pub id: String,
    pub listing_type: TransactionType,
    pub price: Option<Decimal>,
    pub status: ListingStatus,
    pub is_active: bool,
    pub title: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<Decimal>,
    pub square_meter: Option<Decimal>,
    pub built_surface_area: Option<Decimal>,
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
}

impl ListingUpdate {
    /// Validates the listing update data.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if let Some(price) = self.price {
            if price < Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Price cannot be negative".to_string(),
                )));
            }
        }
        Ok(())
    }
}
