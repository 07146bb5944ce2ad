//! Navigation tab visibility check.

use std::collections::BTreeSet;

use checker_core::Verdict;
use checker_core::entities::Tab;

/// The only tabs students may see.
pub const EXPECTED_TABS: [&str; 4] = ["home", "modules", "grades", "people"];

/// Ids of the tabs visible to students.
#[must_use]
pub fn visible_tab_ids(tabs: &[Tab]) -> BTreeSet<&str> {
    tabs.iter()
        .filter(|tab| tab.is_public())
        .map(|tab| tab.id.as_str())
        .collect()
}

/// Pass iff the visible tabs are exactly [`EXPECTED_TABS`].
#[must_use]
pub fn navigation_verdict(tabs: &[Tab]) -> Verdict {
    let expected: BTreeSet<&str> = EXPECTED_TABS.into_iter().collect();
    Verdict::from(visible_tab_ids(tabs) == expected)
}
