//! Matching query and result shapes.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::contacts::ContactSummary;
use crate::leads::Lead;
use crate::listings::{ListingStatus, ListingView, PropertyType, TransactionType};
use crate::prospects::Prospect;

/// Which tenants' listings the search considers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountScope {
    /// Only the caller's own listings.
    #[default]
    #[serde(rename = "current")]
    Current,
    /// Listings of every tenant, drafts excluded.
    #[serde(rename = "cross-account")]
    CrossAccount,
}

/// Search filters. Empty arrays impose no restriction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchFilters {
    pub account_scope: AccountScope,
    pub include_near_strict: bool,
    pub property_types: Vec<PropertyType>,
    pub location_ids: Vec<String>,
    pub prospect_types: Vec<TransactionType>,
    pub listing_types: Vec<TransactionType>,
    pub statuses: Vec<ListingStatus>,
    pub urgency_levels: Vec<i32>,
}

impl Default for MatchFilters {
    fn default() -> Self {
        Self {
            account_scope: AccountScope::Current,
            include_near_strict: true,
            property_types: Vec::new(),
            location_ids: Vec::new(),
            prospect_types: Vec::new(),
            listing_types: Vec::new(),
            statuses: Vec::new(),
            urgency_levels: Vec::new(),
        }
    }
}

/// In-memory pagination window, applied after the full set is assembled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: i64,
    pub limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 50,
        }
    }
}

/// Full matching query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchQuery {
    pub filters: MatchFilters,
    pub pagination: Pagination,
}

/// Match classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchType {
    /// Satisfies all original bounds.
    #[serde(rename = "strict")]
    Strict,
    /// Needed the 5% expansion on price and/or area.
    #[serde(rename = "near-strict")]
    NearStrict,
}

/// Summary of a pre-existing lead attached to a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingLeadSummary {
    pub id: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl From<&Lead> for ExistingLeadSummary {
    fn from(lead: &Lead) -> Self {
        Self {
            id: lead.id.clone(),
            status: lead.status.clone(),
            created_at: lead.created_at,
        }
    }
}

/// Demand-side snapshot embedded in a match for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProspectSnapshot {
    pub id: String,
    pub transaction_type: TransactionType,
    pub property_type: PropertyType,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_bedrooms: Option<i32>,
    pub min_bathrooms: Option<Decimal>,
    pub min_area: Option<Decimal>,
    pub max_area: Option<Decimal>,
    pub urgency: i32,
    pub is_funding_ready: bool,
}

impl From<&Prospect> for ProspectSnapshot {
    fn from(p: &Prospect) -> Self {
        Self {
            id: p.id.clone(),
            transaction_type: p.transaction_type,
            property_type: p.property_type,
            min_price: p.min_price,
            max_price: p.max_price,
            min_bedrooms: p.min_bedrooms,
            min_bathrooms: p.min_bathrooms,
            min_area: p.min_area,
            max_area: p.max_area,
            urgency: p.urgency,
            is_funding_ready: p.is_funding_ready,
        }
    }
}

/// Supply-side snapshot embedded in a match for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSnapshot {
    pub id: String,
    pub listing_type: TransactionType,
    pub price: Option<Decimal>,
    pub status: ListingStatus,
    pub property_type: PropertyType,
    pub title: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<Decimal>,
    pub square_meter: Option<Decimal>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
}

impl From<&ListingView> for ListingSnapshot {
    fn from(view: &ListingView) -> Self {
        Self {
            id: view.listing.id.clone(),
            listing_type: view.listing.listing_type,
            price: view.listing.price,
            status: view.listing.status,
            property_type: view.property.property_type,
            title: view.property.title.clone(),
            bedrooms: view.property.bedrooms,
            bathrooms: view.property.bathrooms,
            square_meter: view.property.square_meter,
            neighborhood: view.location.as_ref().map(|l| l.neighborhood.clone()),
            city: view.property.city.clone(),
        }
    }
}

/// One (prospect, listing) pairing. Derived on every query, never stored;
/// downstream actions identify the pair by (prospectId, listingId).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProspectMatch {
    pub prospect_id: String,
    pub listing_id: String,
    pub listing_account_id: String,
    pub match_type: MatchType,
    pub tolerance_reasons: Vec<String>,
    pub is_cross_account: bool,
    pub can_contact: bool,
    pub has_existing_lead: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_lead: Option<ExistingLeadSummary>,
    pub prospect: ProspectSnapshot,
    pub listing: ListingSnapshot,
    pub contact: ContactSummary,
}

/// Paginated matching result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResults {
    pub matches: Vec<ProspectMatch>,
    pub total_count: usize,
    pub has_next_page: bool,
}
