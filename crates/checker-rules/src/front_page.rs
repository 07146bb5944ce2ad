//! Checks over the course front page HTML.
//!
//! The front page is authored from a shared template. Each check looks for
//! one template fragment: the welcome banner container, the justified
//! description paragraph, the indented instructor paragraph, and the
//! "Docente en:" list naming the program.

use std::sync::LazyLock;

use checker_core::Verdict;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::style::StyleMatch;

/// Opening tag of the template's welcome banner.
pub const WELCOME_BANNER_TAG: &str =
    r#"<div style="position: relative; width: 100%; color: white; overflow: hidden;">"#;

/// Style of the welcome banner container.
pub const WELCOME_BANNER_STYLE: &str =
    "position: relative; width: 100%; color: white; overflow: hidden;";

/// Style of the course description paragraph.
pub const DESCRIPTION_STYLE: &str = "text-align: justify;";

/// The description must be strictly longer than this many characters.
pub const DESCRIPTION_MIN_CHARS: usize = 180;

/// Style of the paragraph holding the instructor name.
pub const INSTRUCTOR_STYLE: &str = "text-align: left; padding-left: 40px;";

/// Instructor name left by the template until someone is assigned.
pub const INSTRUCTOR_PLACEHOLDER: &str = "Pendiente";

/// Bold label introducing the program list.
pub const TECHNICAL_NAME_LABEL: &str = "Docente en:";

static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| selector("p"));
static DIV: LazyLock<Selector> = LazyLock::new(|| selector("div"));
static STRONG: LazyLock<Selector> = LazyLock::new(|| selector("strong"));
static LIST_ITEM: LazyLock<Selector> = LazyLock::new(|| selector("li"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

/// A parsed front page; keeps the raw HTML for verbatim checks.
pub struct FrontPage<'a> {
    raw: &'a str,
    document: Html,
}

impl<'a> FrontPage<'a> {
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        Self {
            raw,
            document: Html::parse_fragment(raw),
        }
    }

    fn first_styled(&self, tag: &Selector, strategy: StyleMatch, expected: &str) -> Option<ElementRef<'_>> {
        self.document.select(tag).find(|element| {
            element
                .value()
                .attr("style")
                .is_some_and(|style| strategy.matches(style, expected))
        })
    }
}

fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// The template's welcome banner container is present.
#[must_use]
pub fn has_welcome_banner(page: &FrontPage<'_>, strategy: StyleMatch) -> bool {
    match strategy {
        StyleMatch::Substring => page.raw.contains(WELCOME_BANNER_TAG),
        StyleMatch::Declarations => page
            .first_styled(&DIV, strategy, WELCOME_BANNER_STYLE)
            .is_some(),
    }
}

/// The first justified paragraph has more than [`DESCRIPTION_MIN_CHARS`] characters.
#[must_use]
pub fn description_is_long_enough(page: &FrontPage<'_>, strategy: StyleMatch) -> bool {
    page.first_styled(&PARAGRAPH, strategy, DESCRIPTION_STYLE)
        .is_some_and(|paragraph| trimmed_text(paragraph).chars().count() > DESCRIPTION_MIN_CHARS)
}

/// The instructor paragraph names someone other than the placeholder.
#[must_use]
pub fn has_assigned_instructor(page: &FrontPage<'_>, strategy: StyleMatch) -> bool {
    page.first_styled(&PARAGRAPH, strategy, INSTRUCTOR_STYLE)
        .and_then(|paragraph| paragraph.select(&STRONG).next())
        .map(trimmed_text)
        .is_some_and(|name| !name.is_empty() && name != INSTRUCTOR_PLACEHOLDER)
}

/// The list following the "Docente en:" paragraph has a non-blank entry.
#[must_use]
pub fn has_technical_name(page: &FrontPage<'_>) -> bool {
    let Some(label) = page
        .document
        .select(&STRONG)
        .find(|strong| strong.text().collect::<String>().contains(TECHNICAL_NAME_LABEL))
    else {
        return false;
    };

    let Some(paragraph) = label
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().name() == "p")
    else {
        return false;
    };

    paragraph
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| sibling.value().name() == "ul")
        .is_some_and(|list| {
            list.select(&LIST_ITEM)
                .any(|item| !trimmed_text(item).is_empty())
        })
}

/// Verdicts of the four front page checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrontPageChecks {
    pub welcome_banner: Verdict,
    pub description: Verdict,
    pub instructor: Verdict,
    pub technical_name: Verdict,
}

impl FrontPageChecks {
    #[must_use]
    pub fn evaluate(html: &str, strategy: StyleMatch) -> Self {
        let page = FrontPage::parse(html);
        Self {
            welcome_banner: has_welcome_banner(&page, strategy).into(),
            description: description_is_long_enough(&page, strategy).into(),
            instructor: has_assigned_instructor(&page, strategy).into(),
            technical_name: has_technical_name(&page).into(),
        }
    }

    /// All four failing, for a front page that could not be fetched.
    #[must_use]
    pub const fn failed() -> Self {
        Self {
            welcome_banner: Verdict::Fail,
            description: Verdict::Fail,
            instructor: Verdict::Fail,
            technical_name: Verdict::Fail,
        }
    }
}
