//! Inline `style` attribute matching.

/// How a rule's expected style is compared with an element's `style` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StyleMatch {
    /// The attribute contains the expected text verbatim.
    #[default]
    Substring,
    /// Every declaration of the expected text appears in the attribute,
    /// ignoring order, case, and whitespace.
    Declarations,
}

impl StyleMatch {
    #[must_use]
    pub fn matches(self, style: &str, expected: &str) -> bool {
        match self {
            Self::Substring => style.contains(expected),
            Self::Declarations => {
                let present = declarations(style);
                declarations(expected)
                    .iter()
                    .all(|declaration| present.contains(declaration))
            }
        }
    }
}

/// `"Color: White ;width:100%"` → `[("color", "white"), ("width", "100%")]`.
fn declarations(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|declaration| declaration.split_once(':'))
        .map(|(property, value)| {
            (
                property.trim().to_ascii_lowercase(),
                value
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
                    .to_ascii_lowercase(),
            )
        })
        .filter(|(property, _)| !property.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: &str = "text-align: left; padding-left: 40px;";

    #[test]
    fn substring_is_verbatim() {
        assert!(StyleMatch::Substring.matches(
            "text-align: left; padding-left: 40px; color: #333;",
            EXPECTED
        ));
        assert!(!StyleMatch::Substring.matches("padding-left: 40px; text-align: left;", EXPECTED));
        assert!(!StyleMatch::Substring.matches("text-align:left;padding-left:40px;", EXPECTED));
    }

    #[test]
    fn declarations_ignore_order_and_spacing() {
        assert!(StyleMatch::Declarations.matches("padding-left:40px ; TEXT-ALIGN: left", EXPECTED));
        assert!(!StyleMatch::Declarations.matches("text-align: left;", EXPECTED));
        assert!(!StyleMatch::Declarations.matches("text-align: right; padding-left: 40px;", EXPECTED));
    }
}
