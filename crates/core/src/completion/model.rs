//! Completion tracker domain types.

use serde::{Deserialize, Serialize};

use crate::listings::{ListingFields, PropertyType};

/// Whether a rule blocks portal publication or only scores quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleImportance {
    /// Publish-blocking.
    Mandatory,
    /// Nice-to-have; never blocks publication.
    Nth,
}

/// Display grouping for completion fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleCategory {
    Basics,
    Location,
    Surfaces,
    Spaces,
    Features,
    Media,
}

/// A single row of the static completion rule table.
///
/// Rules are code-defined, not stored. The same source field may appear in
/// two rows with different importances as long as their applicability sets
/// are disjoint (`builtSurfaceArea` does exactly that).
pub struct FieldRule {
    /// Stable identifier, also the source field path.
    pub id: &'static str,
    /// Spanish display label. The images rule renders its label dynamically;
    /// see [`FieldRule::display_label`].
    pub label: &'static str,
    pub category: RuleCategory,
    pub importance: RuleImportance,
    /// Property types this rule applies to. `None` = applies to all.
    pub applies_to: Option<&'static [PropertyType]>,
    /// Predicate deciding whether the field is satisfied.
    pub validator: fn(&ListingFields) -> bool,
}

impl FieldRule {
    /// Whether this rule applies to the given property type.
    pub fn applies_to_property(&self, property_type: PropertyType) -> bool {
        match self.applies_to {
            Some(types) => types.contains(&property_type),
            None => true,
        }
    }

    /// Resolves the display label for the given property type.
    ///
    /// The images rule embeds its type-dependent minimum count in the label;
    /// every other rule uses its static label.
    pub fn display_label(&self, property_type: PropertyType) -> String {
        if self.id == "images" {
            format!(
                "Imágenes (mínimo {})",
                super::rules::min_images(property_type)
            )
        } else {
            self.label.to_string()
        }
    }
}

/// A rule outcome as surfaced to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionField {
    pub id: String,
    pub label: String,
    pub category: RuleCategory,
}

/// Completed/pending split for one importance bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionBucket {
    pub completed: Vec<CompletionField>,
    pub pending: Vec<CompletionField>,
    pub total: usize,
    pub completed_count: usize,
}

/// Full completion report for one listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResult {
    pub mandatory: CompletionBucket,
    pub nth: CompletionBucket,
    pub overall_percentage: i32,
    pub overall_completed: usize,
    pub overall_total: usize,
    pub can_publish_to_portals: bool,
}

impl CompletionResult {
    /// The zero result returned for absent input: nothing completed,
    /// nothing publishable.
    pub fn empty() -> Self {
        Self::default()
    }
}
