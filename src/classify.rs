//! Line classification for plain-text job descriptions.
//!
//! The classifier walks the input line by line and assigns each non-blank line
//! a [`StyleCategory`] using an ordered rule list.  The first rule whose
//! predicate matches wins, so the order of [`RULES`] is the tie-break policy:
//! a line such as `• Must have:` is a bullet and never a section header.

use log::debug;

use crate::model::{Story, StoryElement, StyleCategory, StyledLine};

/// Prefix of the company metadata line.
pub const COMPANY_PREFIX: &str = "Company:";
/// Prefix of the location metadata line.
pub const LOCATION_PREFIX: &str = "Location:";
/// Prefix of the experience metadata line.
pub const EXPERIENCE_PREFIX: &str = "Experience Level:";
/// Marker that starts a bullet item.
pub const BULLET_MARKER: char = '•';
/// Suffix that turns a line into a section header.
pub const SECTION_SUFFIX: char = ':';

/// Height of the blank space emitted after the experience line, in points.
pub const EXPERIENCE_SPACER_PT: f64 = 12.0;

/// A trimmed input line and its position in the trimmed document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentLine<'a> {
    /// Zero-based line index; blank lines still advance it.
    pub index: usize,
    /// Line text without surrounding whitespace.
    pub text: &'a str,
}

/// A classification rule: a predicate and the category it assigns.
pub struct LineRule {
    /// Short name used in debug logging.
    pub name: &'static str,
    /// The category assigned when the predicate matches.
    pub category: StyleCategory,
    matches: fn(&ContentLine<'_>) -> bool,
}

impl LineRule {
    /// Returns whether the rule applies to `line`.
    pub fn matches(&self, line: &ContentLine<'_>) -> bool {
        (self.matches)(line)
    }
}

fn is_first_line(line: &ContentLine<'_>) -> bool {
    line.index == 0
}

fn is_company(line: &ContentLine<'_>) -> bool {
    line.text.starts_with(COMPANY_PREFIX)
}

fn is_location(line: &ContentLine<'_>) -> bool {
    line.text.starts_with(LOCATION_PREFIX)
}

fn is_experience(line: &ContentLine<'_>) -> bool {
    line.text.starts_with(EXPERIENCE_PREFIX)
}

fn is_section_header(line: &ContentLine<'_>) -> bool {
    line.text.ends_with(SECTION_SUFFIX) && !line.text.starts_with(BULLET_MARKER)
}

fn is_bullet(line: &ContentLine<'_>) -> bool {
    line.text.starts_with(BULLET_MARKER)
}

/// Ordered classification rules. Lines matching none of them are body text.
pub const RULES: &[LineRule] = &[
    LineRule {
        name: "first-line",
        category: StyleCategory::Title,
        matches: is_first_line,
    },
    LineRule {
        name: "company-prefix",
        category: StyleCategory::CompanyName,
        matches: is_company,
    },
    LineRule {
        name: "location-prefix",
        category: StyleCategory::LocationInfo,
        matches: is_location,
    },
    LineRule {
        name: "experience-prefix",
        category: StyleCategory::ExperienceInfo,
        matches: is_experience,
    },
    LineRule {
        name: "colon-suffix",
        category: StyleCategory::SectionHeader,
        matches: is_section_header,
    },
    LineRule {
        name: "bullet-prefix",
        category: StyleCategory::BulletItem,
        matches: is_bullet,
    },
];

/// Returns the category of a single non-blank line.
pub fn classify_line(line: &ContentLine<'_>) -> StyleCategory {
    RULES
        .iter()
        .find(|rule| rule.matches(line))
        .map(|rule| {
            debug!(
                "line {} matched rule '{}' -> {}",
                line.index, rule.name, rule.category
            );
            rule.category
        })
        .unwrap_or(StyleCategory::BodyText)
}

/// Splits `content` into trimmed lines with their positions.
///
/// The whole document is trimmed first, so position 0 is always the first
/// non-blank line.  Blank lines are included so they advance the index.
pub fn content_lines(content: &str) -> impl Iterator<Item = ContentLine<'_>> {
    content
        .trim()
        .lines()
        .enumerate()
        .map(|(index, text)| ContentLine {
            index,
            text: text.trim(),
        })
}

/// Text of the footer appended to every story.
pub fn footer_text(source_name: &str) -> String {
    format!("Generated from {}", source_name)
}

/// Classifies `content` into a story.
///
/// `source_name` is only used for the trailing footer line.
pub fn classify(content: &str, source_name: &str) -> Story {
    let mut elements = Vec::new();

    for line in content_lines(content).filter(|line| !line.text.is_empty()) {
        let category = classify_line(&line);
        elements.push(StoryElement::Line(StyledLine::new(line.text, category)));

        if category == StyleCategory::ExperienceInfo {
            elements.push(StoryElement::Spacer(EXPERIENCE_SPACER_PT));
        }
    }

    elements.push(StoryElement::Line(StyledLine::new(
        footer_text(source_name),
        StyleCategory::Footer,
    )));

    Story::from_elements(elements)
}
