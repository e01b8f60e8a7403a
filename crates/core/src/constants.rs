use rust_decimal::Decimal;

/// Tolerance applied beyond the stated price/area bounds for near-strict
/// matches, as a fraction (5%).
pub const MATCH_TOLERANCE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Status assigned to a lead created from the matching search.
pub const LEAD_STATUS_APPOINTMENT_PENDING: &str = "Cita Pendiente";

/// Source recorded on leads created from the matching search.
pub const LEAD_SOURCE_SEARCH: &str = "Buscador";

/// Contact role on a listing representing pursued buyer interest.
pub const CONTACT_TYPE_BUYER: &str = "buyer";

/// Minimum image count for residential and commercial listings.
pub const MIN_IMAGES_STANDARD: u32 = 5;

/// Minimum image count for garages and land plots.
pub const MIN_IMAGES_REDUCED: u32 = 3;

/// Minimum trimmed length for a publishable description.
pub const MIN_DESCRIPTION_LENGTH: usize = 20;

/// Construction years at or below this value are treated as absent.
pub const MIN_CONSTRUCTION_YEAR: i32 = 1800;
