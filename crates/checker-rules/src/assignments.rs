//! Assignment listing.

use checker_config::RulesConfig;
use checker_core::entities::Assignment;
use checker_core::{AssignmentListing, Verdict};

/// Names in API order minus the block-list; fails when the placeholder
/// assignment is still there. An empty course yields a failing listing.
#[must_use]
pub fn list_assignments(assignments: &[Assignment], rules: &RulesConfig) -> AssignmentListing {
    if assignments.is_empty() {
        return AssignmentListing::unavailable();
    }

    let names: Vec<String> = assignments
        .iter()
        .map(|assignment| assignment.name.clone())
        .filter(|name| !rules.blocked_assignments.contains(name))
        .collect();
    let verdict = Verdict::from(!names.contains(&rules.placeholder_assignment));

    AssignmentListing { names, verdict }
}
