//! Pure eligibility and classification rules for (prospect, listing) pairs.
//!
//! Everything in this file is free of I/O so the constraint logic can be
//! tested without fixtures for the display shapes. A pair is eligible only
//! when every rule holds; a pair that needed the 5% expansion on a numeric
//! band is classified near-strict and carries one reason per expanded
//! dimension.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::matching_model::MatchType;
use crate::constants::MATCH_TOLERANCE;
use crate::listings::{ListingStatus, ListingView, PropertyType, TransactionType};
use crate::prospects::{Prospect, ProspectExtras};

/// Outcome of evaluating one eligible pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairEvaluation {
    pub match_type: MatchType,
    pub tolerance_reasons: Vec<String>,
}

/// How a value sits relative to a [min, max] band with tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RangeFit {
    /// Inside the original bounds.
    Within,
    /// Outside the original bounds but inside the expanded band; carries the
    /// signed percentage beyond the violated bound.
    Tolerated(Decimal),
    /// Outside even the expanded band, or value missing while a bound is set.
    Outside,
}

/// Evaluates one candidate pair against every constraint rule.
///
/// Returns `None` for ineligible pairs. Account scoping is the candidate
/// query's concern and is not re-checked here; listing activity is, since it
/// holds regardless of scope.
pub fn evaluate_pair(prospect: &Prospect, listing: &ListingView) -> Option<PairEvaluation> {
    if !listing.listing.is_active || listing.listing.status == ListingStatus::Draft {
        return None;
    }
    if !transaction_compatible(prospect.transaction_type, listing.listing.listing_type) {
        return None;
    }
    if !property_type_compatible(prospect.property_type, listing.property.property_type) {
        return None;
    }

    if let Some(min) = prospect.min_bedrooms {
        match listing.property.bedrooms {
            Some(bedrooms) if bedrooms >= min => {}
            _ => return None,
        }
    }
    if let Some(min) = prospect.min_bathrooms {
        match listing.property.bathrooms {
            Some(bathrooms) if bathrooms.round_dp(1) >= min.round_dp(1) => {}
            _ => return None,
        }
    }

    let mut tolerance_reasons = Vec::new();

    match range_fit(
        listing.listing.price,
        prospect.min_price,
        prospect.max_price,
    ) {
        RangeFit::Outside => return None,
        RangeFit::Tolerated(pct) => tolerance_reasons.push(tolerance_reason("Price", pct)),
        RangeFit::Within => {}
    }
    match range_fit(
        listing.property.square_meter,
        prospect.min_area,
        prospect.max_area,
    ) {
        RangeFit::Outside => return None,
        RangeFit::Tolerated(pct) => tolerance_reasons.push(tolerance_reason("Area", pct)),
        RangeFit::Within => {}
    }

    if !prospect.preferred_areas.is_empty() {
        let Some(neighborhood_id) = listing.property.neighborhood_id.as_deref() else {
            return None;
        };
        if !prospect
            .preferred_areas
            .iter()
            .any(|area| area.neighborhood_id == neighborhood_id)
        {
            return None;
        }
    }

    let extras = ProspectExtras::parse(prospect.extras.as_deref());
    if extras.elevator && !listing.property.has_elevator {
        return None;
    }
    if extras.garage && !listing.property.has_garage {
        return None;
    }
    if extras.storage_room && !listing.property.has_storage_room {
        return None;
    }
    if extras.terrace && !listing.property.has_terrace {
        return None;
    }

    let match_type = if tolerance_reasons.is_empty() {
        MatchType::Strict
    } else {
        MatchType::NearStrict
    };
    Some(PairEvaluation {
        match_type,
        tolerance_reasons,
    })
}

/// Exact match, or the one-directional Rent → RentWithOption upgrade.
fn transaction_compatible(wanted: TransactionType, offered: TransactionType) -> bool {
    wanted == offered
        || (wanted == TransactionType::Rent && offered == TransactionType::RentWithOption)
}

/// Exact match, or the one-directional piso → casa upgrade. No substitution
/// exists for the remaining typologies.
fn property_type_compatible(wanted: PropertyType, actual: PropertyType) -> bool {
    wanted == actual || (wanted == PropertyType::Piso && actual == PropertyType::Casa)
}

/// Places a value in the tolerance-expanded band. Both expanded boundaries
/// are inclusive; a null bound is unbounded on that side, both null means
/// no preference.
fn range_fit(value: Option<Decimal>, min: Option<Decimal>, max: Option<Decimal>) -> RangeFit {
    if min.is_none() && max.is_none() {
        return RangeFit::Within;
    }
    let Some(value) = value else {
        return RangeFit::Outside;
    };

    if let Some(min) = min {
        if value < min * (Decimal::ONE - MATCH_TOLERANCE) {
            return RangeFit::Outside;
        }
        if value < min {
            return RangeFit::Tolerated((value - min) / min * Decimal::ONE_HUNDRED);
        }
    }
    if let Some(max) = max {
        if value > max * (Decimal::ONE + MATCH_TOLERANCE) {
            return RangeFit::Outside;
        }
        if value > max {
            return RangeFit::Tolerated((value - max) / max * Decimal::ONE_HUNDRED);
        }
    }
    RangeFit::Within
}

/// Renders a tolerance reason like `"Price +3.2%"` with one decimal.
fn tolerance_reason(dimension: &str, pct: Decimal) -> String {
    format!("{} {:+.1}%", dimension, pct.to_f64().unwrap_or(0.0))
}
