//! The completion rule interpreter.

use super::model::{CompletionBucket, CompletionField, CompletionResult, RuleImportance};
use super::rules::field_rules;
use crate::listings::ListingFields;

/// Evaluates the rule table against one listing's flattened field set.
///
/// Pure and infallible: absent input yields the zero result (0%, not
/// publishable), and a field value the validators cannot interpret is
/// simply pending, never an error.
pub fn calculate_completion(listing: Option<&ListingFields>) -> CompletionResult {
    let Some(fields) = listing else {
        return CompletionResult::empty();
    };

    let property_type = fields.property_type;
    let mut mandatory = CompletionBucket::default();
    let mut nth = CompletionBucket::default();

    for rule in field_rules() {
        if !rule.applies_to_property(property_type) {
            continue;
        }

        let satisfied = (rule.validator)(fields);
        let field = CompletionField {
            id: rule.id.to_string(),
            label: rule.display_label(property_type),
            category: rule.category,
        };

        let bucket = match rule.importance {
            RuleImportance::Mandatory => &mut mandatory,
            RuleImportance::Nth => &mut nth,
        };
        bucket.total += 1;
        if satisfied {
            bucket.completed_count += 1;
            bucket.completed.push(field);
        } else {
            bucket.pending.push(field);
        }
    }

    let overall_total = mandatory.total + nth.total;
    let overall_completed = mandatory.completed_count + nth.completed_count;
    let overall_percentage = if overall_total == 0 {
        0
    } else {
        ((overall_completed * 100) as f64 / overall_total as f64).round() as i32
    };
    let can_publish_to_portals = mandatory.pending.is_empty();

    CompletionResult {
        mandatory,
        nth,
        overall_percentage,
        overall_completed,
        overall_total,
        can_publish_to_portals,
    }
}
