//! Data structures describing the classified content of a job description.
//!
//! The story produced by [`crate::classify`] is a flat, ordered list of
//! [`StoryElement`]s.  The types here do not reference the rendering crate so a
//! story can be inspected, compared and tested without loading any fonts.

use std::fmt;

/// Horizontal placement of a paragraph once it is converted into
/// [`genpdf::elements`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Left aligned content.
    #[default]
    Left,
    /// Center aligned content.
    Center,
    /// Right aligned content.
    Right,
}

/// Semantic class of a single line of the job description.
///
/// Every category maps to exactly one paragraph style in
/// [`crate::style::StyleSheet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleCategory {
    /// The job title, always the first non-blank line.
    Title,
    /// `Company: ...`
    CompanyName,
    /// `Location: ...`
    LocationInfo,
    /// `Experience Level: ...`
    ExperienceInfo,
    /// A line ending in `:` that introduces a section.
    SectionHeader,
    /// A line starting with `•`.
    BulletItem,
    /// Any other paragraph.
    BodyText,
    /// The generated trailer naming the source file.
    Footer,
}

impl StyleCategory {
    /// All categories in declaration order.
    pub const ALL: [StyleCategory; 8] = [
        StyleCategory::Title,
        StyleCategory::CompanyName,
        StyleCategory::LocationInfo,
        StyleCategory::ExperienceInfo,
        StyleCategory::SectionHeader,
        StyleCategory::BulletItem,
        StyleCategory::BodyText,
        StyleCategory::Footer,
    ];

    /// Short lowercase name used in log output and the outline printout.
    pub fn name(self) -> &'static str {
        match self {
            StyleCategory::Title => "title",
            StyleCategory::CompanyName => "company",
            StyleCategory::LocationInfo => "location",
            StyleCategory::ExperienceInfo => "experience",
            StyleCategory::SectionHeader => "section",
            StyleCategory::BulletItem => "bullet",
            StyleCategory::BodyText => "body",
            StyleCategory::Footer => "footer",
        }
    }
}

impl fmt::Display for StyleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A line of text together with the category that decides its presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledLine {
    text: String,
    category: StyleCategory,
}

impl StyledLine {
    /// Creates a new styled line.
    pub fn new(text: impl Into<String>, category: StyleCategory) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    /// Returns the text of the line.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the category assigned to the line.
    pub fn category(&self) -> StyleCategory {
        self.category
    }
}

/// Individual entries of a [`Story`].
#[derive(Clone, Debug, PartialEq)]
pub enum StoryElement {
    /// Styled paragraph content.
    Line(StyledLine),
    /// Vertical blank space, in points.
    Spacer(f64),
}

impl StoryElement {
    /// Returns the styled line if this element carries text.
    pub fn as_line(&self) -> Option<&StyledLine> {
        match self {
            StoryElement::Line(line) => Some(line),
            StoryElement::Spacer(_) => None,
        }
    }

    /// Returns whether the element is a spacing marker.
    pub fn is_spacer(&self) -> bool {
        matches!(self, StoryElement::Spacer(_))
    }
}

/// Ordered sequence of styled elements handed to the document renderer.
///
/// A story is built once by the classifier and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Story {
    elements: Vec<StoryElement>,
}

impl Story {
    pub(crate) fn from_elements(elements: Vec<StoryElement>) -> Self {
        Self { elements }
    }

    /// Returns all elements in document order.
    pub fn elements(&self) -> &[StoryElement] {
        &self.elements
    }

    /// Number of elements, spacers included.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns whether the story has no elements at all.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the text-carrying elements.
    pub fn lines(&self) -> impl Iterator<Item = &StyledLine> + '_ {
        self.elements.iter().filter_map(StoryElement::as_line)
    }

    /// Returns the categories of the text-carrying elements in order.
    pub fn categories(&self) -> Vec<StyleCategory> {
        self.lines().map(StyledLine::category).collect()
    }

    /// Returns the text of the title line, if the story has one.
    pub fn title(&self) -> Option<&str> {
        self.lines()
            .find(|line| line.category() == StyleCategory::Title)
            .map(StyledLine::text)
    }
}

impl<'a> IntoIterator for &'a Story {
    type Item = &'a StoryElement;
    type IntoIter = std::slice::Iter<'a, StoryElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Story, StoryElement, StyleCategory, StyledLine};

    #[test]
    fn lines_skip_spacers() {
        let story = Story::from_elements(vec![
            StoryElement::Line(StyledLine::new("Engineer", StyleCategory::Title)),
            StoryElement::Spacer(12.0),
            StoryElement::Line(StyledLine::new("Body", StyleCategory::BodyText)),
        ]);

        assert_eq!(story.len(), 3);
        assert_eq!(
            story.categories(),
            vec![StyleCategory::Title, StyleCategory::BodyText]
        );
        assert_eq!(story.title(), Some("Engineer"));
    }

    #[test]
    fn category_names_are_distinct() {
        let mut names: Vec<_> = StyleCategory::ALL.iter().map(|c| c.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), StyleCategory::ALL.len());
    }
}
