//! Structured view of a classified job description.
//!
//! [`JobOutline::from_story`] groups the flat story into the header fields and
//! the sections introduced by section headers.  Bullets and paragraphs that
//! appear before the first section header are kept in [`JobOutline::preamble`].

use std::fmt;

use crate::classify::{
    BULLET_MARKER, COMPANY_PREFIX, EXPERIENCE_PREFIX, LOCATION_PREFIX, SECTION_SUFFIX,
};
use crate::model::{Story, StyleCategory};

/// A section header and the content that follows it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutlineSection {
    heading: String,
    bullets: Vec<String>,
    paragraphs: Vec<String>,
}

impl OutlineSection {
    fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            ..Self::default()
        }
    }

    /// The header text without its trailing colon.
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Bullet texts without the bullet marker.
    pub fn bullets(&self) -> &[String] {
        &self.bullets
    }

    /// Plain paragraphs inside the section.
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }
}

/// Header fields and sections recognised in a job description.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobOutline {
    title: Option<String>,
    company: Option<String>,
    location: Option<String>,
    experience_level: Option<String>,
    preamble: OutlineSection,
    sections: Vec<OutlineSection>,
}

fn field_value(text: &str, prefix: &str) -> String {
    text.strip_prefix(prefix).unwrap_or(text).trim().to_owned()
}

fn bullet_text(text: &str) -> String {
    text.strip_prefix(BULLET_MARKER).unwrap_or(text).trim().to_owned()
}

impl JobOutline {
    /// Groups `story` into header fields and sections.
    ///
    /// Repeated metadata lines keep the first value seen.
    pub fn from_story(story: &Story) -> Self {
        let mut outline = JobOutline::default();

        for line in story.lines() {
            let text = line.text();
            match line.category() {
                StyleCategory::Title => {
                    outline.title.get_or_insert_with(|| text.to_owned());
                }
                StyleCategory::CompanyName => {
                    outline
                        .company
                        .get_or_insert_with(|| field_value(text, COMPANY_PREFIX));
                }
                StyleCategory::LocationInfo => {
                    outline
                        .location
                        .get_or_insert_with(|| field_value(text, LOCATION_PREFIX));
                }
                StyleCategory::ExperienceInfo => {
                    outline
                        .experience_level
                        .get_or_insert_with(|| field_value(text, EXPERIENCE_PREFIX));
                }
                StyleCategory::SectionHeader => {
                    let heading = text.strip_suffix(SECTION_SUFFIX).unwrap_or(text).trim();
                    outline.sections.push(OutlineSection::new(heading));
                }
                StyleCategory::BulletItem => {
                    outline.current_section().bullets.push(bullet_text(text));
                }
                StyleCategory::BodyText => {
                    outline.current_section().paragraphs.push(text.to_owned());
                }
                StyleCategory::Footer => {}
            }
        }

        outline
    }

    fn current_section(&mut self) -> &mut OutlineSection {
        match self.sections.last_mut() {
            Some(section) => section,
            None => &mut self.preamble,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn experience_level(&self) -> Option<&str> {
        self.experience_level.as_deref()
    }

    /// Content that appears before the first section header.
    pub fn preamble(&self) -> &OutlineSection {
        &self.preamble
    }

    pub fn sections(&self) -> &[OutlineSection] {
        &self.sections
    }

    /// Returns the first section whose heading matches `heading`, ignoring ASCII case.
    pub fn section(&self, heading: &str) -> Option<&OutlineSection> {
        self.sections
            .iter()
            .find(|section| section.heading.eq_ignore_ascii_case(heading))
    }
}

impl fmt::Display for JobOutline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            ("Title", &self.title),
            ("Company", &self.company),
            ("Location", &self.location),
            ("Experience Level", &self.experience_level),
        ];
        for (label, value) in fields {
            writeln!(f, "{:<17} {}", format!("{}:", label), value.as_deref().unwrap_or("-"))?;
        }

        for paragraph in &self.preamble.paragraphs {
            writeln!(f, "\n{}", paragraph)?;
        }
        for bullet in &self.preamble.bullets {
            writeln!(f, "  - {}", bullet)?;
        }

        for section in &self.sections {
            writeln!(f, "\n[{}]", section.heading)?;
            for paragraph in &section.paragraphs {
                writeln!(f, "  {}", paragraph)?;
            }
            for bullet in &section.bullets {
                writeln!(f, "  - {}", bullet)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;

    const SAMPLE: &str = "Senior Engineer
Company: Acme Corp
Location: Remote
Experience Level: 5+ years

We are hiring.

Requirements:
• Python
• SQL

Responsibilities:
Own the data platform.
• Ship features
";

    #[test]
    fn header_fields_drop_their_prefixes() {
        let outline = JobOutline::from_story(&classify(SAMPLE, "sample.txt"));
        assert_eq!(outline.title(), Some("Senior Engineer"));
        assert_eq!(outline.company(), Some("Acme Corp"));
        assert_eq!(outline.location(), Some("Remote"));
        assert_eq!(outline.experience_level(), Some("5+ years"));
    }

    #[test]
    fn sections_collect_following_content() {
        let outline = JobOutline::from_story(&classify(SAMPLE, "sample.txt"));

        assert_eq!(outline.preamble().paragraphs(), ["We are hiring."]);
        assert_eq!(outline.sections().len(), 2);

        let requirements = outline.section("requirements").expect("requirements section");
        assert_eq!(requirements.bullets(), ["Python", "SQL"]);
        assert!(requirements.paragraphs().is_empty());

        let responsibilities = &outline.sections()[1];
        assert_eq!(responsibilities.heading(), "Responsibilities");
        assert_eq!(responsibilities.paragraphs(), ["Own the data platform."]);
        assert_eq!(responsibilities.bullets(), ["Ship features"]);
    }

    #[test]
    fn footer_is_not_part_of_the_outline() {
        let outline = JobOutline::from_story(&classify("Title", "x.txt"));
        assert!(outline.preamble().paragraphs().is_empty());
        assert!(outline.sections().is_empty());
    }

    #[test]
    fn display_marks_missing_fields() {
        let outline = JobOutline::from_story(&classify("Data Analyst\nSkills:\n• Excel", "x.txt"));
        let printed = outline.to_string();
        assert!(printed.contains("Title:            Data Analyst"));
        assert!(printed.contains("Company:          -"));
        assert!(printed.contains("[Skills]"));
        assert!(printed.contains("  - Excel"));
    }
}
