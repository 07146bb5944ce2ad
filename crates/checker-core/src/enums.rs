//! Verdict enum and the glyph convention used by every report surface.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Glyph rendered for a passing check.
pub const PASS_GLYPH: &str = "\u{2714}\u{fe0f}";

/// Glyph rendered for a failing check.
pub const FAIL_GLYPH: &str = "\u{274c}";

/// Outcome of a single checklist rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Pass,
    #[default]
    Fail,
}

impl Verdict {
    #[must_use]
    pub const fn from_bool(passed: bool) -> Self {
        if passed { Self::Pass } else { Self::Fail }
    }

    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
        }
    }

    /// ✔️ or ❌.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Pass => PASS_GLYPH,
            Self::Fail => FAIL_GLYPH,
        }
    }
}

impl From<bool> for Verdict {
    fn from(passed: bool) -> Self {
        Self::from_bool(passed)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
