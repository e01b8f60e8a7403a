//! The static completion rule table.
//!
//! One row per field check, evaluated generically by the interpreter loop in
//! `evaluator.rs`. Validator semantics:
//! - numeric fields: present and > 0 (construction year: > 1800)
//! - string fields: non-empty after trimming
//! - boolean flags: strictly `true` (false and unset are both pending)
//! - description: trimmed length >= 20
//! - images: count >= a property-type-dependent minimum

use rust_decimal::Decimal;

use super::model::{FieldRule, RuleCategory, RuleImportance};
use crate::constants::{
    MIN_CONSTRUCTION_YEAR, MIN_DESCRIPTION_LENGTH, MIN_IMAGES_REDUCED, MIN_IMAGES_STANDARD,
};
use crate::listings::{ListingFields, PropertyType};

/// Minimum image count required for a property type.
pub fn min_images(property_type: PropertyType) -> u32 {
    match property_type {
        PropertyType::Garaje | PropertyType::Solar => MIN_IMAGES_REDUCED,
        PropertyType::Piso | PropertyType::Casa | PropertyType::Local => MIN_IMAGES_STANDARD,
    }
}

// ---------------------------------------------------------------------------
// Validator primitives
// ---------------------------------------------------------------------------

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

fn positive(value: Option<Decimal>) -> bool {
    value.is_some_and(|d| d > Decimal::ZERO)
}

fn positive_count(value: Option<i32>) -> bool {
    value.is_some_and(|n| n > 0)
}

// ---------------------------------------------------------------------------
// Per-field validators
// ---------------------------------------------------------------------------

fn price(f: &ListingFields) -> bool {
    positive(f.price)
}

fn listing_type(f: &ListingFields) -> bool {
    f.listing_type.is_some()
}

// The typed model cannot represent an absent property type; the rule stays
// in the table so the report still lists it as a satisfied mandatory field.
fn property_type(_: &ListingFields) -> bool {
    true
}

fn street(f: &ListingFields) -> bool {
    present(&f.street)
}

fn city(f: &ListingFields) -> bool {
    present(&f.city)
}

fn province(f: &ListingFields) -> bool {
    present(&f.province)
}

fn postal_code(f: &ListingFields) -> bool {
    present(&f.postal_code)
}

fn description(f: &ListingFields) -> bool {
    f.description
        .as_deref()
        .is_some_and(|s| s.trim().chars().count() >= MIN_DESCRIPTION_LENGTH)
}

fn images(f: &ListingFields) -> bool {
    f.image_count >= min_images(f.property_type) as i32
}

fn square_meter(f: &ListingFields) -> bool {
    positive(f.square_meter)
}

fn built_surface_area(f: &ListingFields) -> bool {
    positive(f.built_surface_area)
}

fn bedrooms(f: &ListingFields) -> bool {
    positive_count(f.bedrooms)
}

fn bathrooms(f: &ListingFields) -> bool {
    positive(f.bathrooms)
}

fn title(f: &ListingFields) -> bool {
    present(&f.title)
}

fn construction_year(f: &ListingFields) -> bool {
    f.construction_year.is_some_and(|y| y > MIN_CONSTRUCTION_YEAR)
}

fn has_elevator(f: &ListingFields) -> bool {
    f.has_elevator
}

fn has_garage(f: &ListingFields) -> bool {
    f.has_garage
}

fn has_storage_room(f: &ListingFields) -> bool {
    f.has_storage_room
}

fn has_terrace(f: &ListingFields) -> bool {
    f.has_terrace
}

// ---------------------------------------------------------------------------
// Applicability sets
// ---------------------------------------------------------------------------

const ALL_BUT_GARAJE: &[PropertyType] = &[
    PropertyType::Piso,
    PropertyType::Casa,
    PropertyType::Local,
    PropertyType::Solar,
];
const GARAJE_ONLY: &[PropertyType] = &[PropertyType::Garaje];
const RESIDENTIAL: &[PropertyType] = &[PropertyType::Piso, PropertyType::Casa];
const WITH_BATHROOMS: &[PropertyType] = &[PropertyType::Piso, PropertyType::Casa, PropertyType::Local];
const BUILT: &[PropertyType] = &[
    PropertyType::Piso,
    PropertyType::Casa,
    PropertyType::Local,
    PropertyType::Garaje,
];

// ---------------------------------------------------------------------------
// The table
// ---------------------------------------------------------------------------

const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        id: "price",
        label: "Precio",
        category: RuleCategory::Basics,
        importance: RuleImportance::Mandatory,
        applies_to: None,
        validator: price,
    },
    FieldRule {
        id: "listingType",
        label: "Tipo de operación",
        category: RuleCategory::Basics,
        importance: RuleImportance::Mandatory,
        applies_to: None,
        validator: listing_type,
    },
    FieldRule {
        id: "propertyType",
        label: "Tipo de inmueble",
        category: RuleCategory::Basics,
        importance: RuleImportance::Mandatory,
        applies_to: None,
        validator: property_type,
    },
    FieldRule {
        id: "street",
        label: "Calle",
        category: RuleCategory::Location,
        importance: RuleImportance::Mandatory,
        applies_to: None,
        validator: street,
    },
    FieldRule {
        id: "city",
        label: "Ciudad",
        category: RuleCategory::Location,
        importance: RuleImportance::Mandatory,
        applies_to: None,
        validator: city,
    },
    FieldRule {
        id: "province",
        label: "Provincia",
        category: RuleCategory::Location,
        importance: RuleImportance::Mandatory,
        applies_to: None,
        validator: province,
    },
    FieldRule {
        id: "postalCode",
        label: "Código postal",
        category: RuleCategory::Location,
        importance: RuleImportance::Mandatory,
        applies_to: None,
        validator: postal_code,
    },
    FieldRule {
        id: "description",
        label: "Descripción",
        category: RuleCategory::Basics,
        importance: RuleImportance::Mandatory,
        applies_to: None,
        validator: description,
    },
    FieldRule {
        id: "images",
        label: "Imágenes",
        category: RuleCategory::Media,
        importance: RuleImportance::Mandatory,
        applies_to: None,
        validator: images,
    },
    FieldRule {
        id: "squareMeter",
        label: "Superficie útil",
        category: RuleCategory::Surfaces,
        importance: RuleImportance::Mandatory,
        applies_to: Some(ALL_BUT_GARAJE),
        validator: square_meter,
    },
    // builtSurfaceArea appears twice: publish-blocking for garages, a
    // quality signal everywhere else. The applicability sets are disjoint.
    FieldRule {
        id: "builtSurfaceArea",
        label: "Superficie construida",
        category: RuleCategory::Surfaces,
        importance: RuleImportance::Mandatory,
        applies_to: Some(GARAJE_ONLY),
        validator: built_surface_area,
    },
    FieldRule {
        id: "builtSurfaceArea",
        label: "Superficie construida",
        category: RuleCategory::Surfaces,
        importance: RuleImportance::Nth,
        applies_to: Some(ALL_BUT_GARAJE),
        validator: built_surface_area,
    },
    FieldRule {
        id: "bedrooms",
        label: "Dormitorios",
        category: RuleCategory::Spaces,
        importance: RuleImportance::Mandatory,
        applies_to: Some(RESIDENTIAL),
        validator: bedrooms,
    },
    FieldRule {
        id: "bathrooms",
        label: "Baños",
        category: RuleCategory::Spaces,
        importance: RuleImportance::Mandatory,
        applies_to: Some(WITH_BATHROOMS),
        validator: bathrooms,
    },
    FieldRule {
        id: "title",
        label: "Título",
        category: RuleCategory::Basics,
        importance: RuleImportance::Nth,
        applies_to: None,
        validator: title,
    },
    FieldRule {
        id: "constructionYear",
        label: "Año de construcción",
        category: RuleCategory::Basics,
        importance: RuleImportance::Nth,
        applies_to: Some(BUILT),
        validator: construction_year,
    },
    FieldRule {
        id: "hasElevator",
        label: "Ascensor",
        category: RuleCategory::Features,
        importance: RuleImportance::Nth,
        applies_to: Some(WITH_BATHROOMS),
        validator: has_elevator,
    },
    FieldRule {
        id: "hasGarage",
        label: "Garaje incluido",
        category: RuleCategory::Features,
        importance: RuleImportance::Nth,
        applies_to: Some(RESIDENTIAL),
        validator: has_garage,
    },
    FieldRule {
        id: "hasStorageRoom",
        label: "Trastero",
        category: RuleCategory::Features,
        importance: RuleImportance::Nth,
        applies_to: Some(RESIDENTIAL),
        validator: has_storage_room,
    },
    FieldRule {
        id: "hasTerrace",
        label: "Terraza",
        category: RuleCategory::Features,
        importance: RuleImportance::Nth,
        applies_to: Some(RESIDENTIAL),
        validator: has_terrace,
    },
];

/// The full rule table.
pub fn field_rules() -> &'static [FieldRule] {
    FIELD_RULES
}
