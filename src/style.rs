//! The fixed paragraph styles applied to each [`StyleCategory`].
//!
//! Styles are plain immutable data.  [`StyleSheet::job_description`] is the
//! only style set the converter uses; it is passed by reference into the
//! renderer rather than kept in global state.

use genpdf::style::{Color, Style};
use genpdf::Alignment;

use crate::model::{HorizontalAlignment, StyleCategory};

/// Dark teal used for the title and section headers.
pub const HEADING_COLOR: Color = Color::Rgb(0x02, 0x49, 0x50);
/// Lighter teal used for the company name.
pub const ACCENT_COLOR: Color = Color::Rgb(0x0F, 0xA4, 0xAF);
/// Default text color.
pub const TEXT_COLOR: Color = Color::Rgb(0x00, 0x00, 0x00);
/// Muted grey used for the footer.
pub const FOOTER_COLOR: Color = Color::Rgb(0x80, 0x80, 0x80);

/// Font face variant of a paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
    Italic,
}

/// Presentation attributes of one paragraph category.
///
/// Lengths are in PDF points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParagraphStyle {
    pub font_size: u8,
    pub color: Color,
    pub weight: FontWeight,
    pub alignment: HorizontalAlignment,
    pub left_indent: f64,
    pub space_before: f64,
    pub space_after: f64,
}

impl ParagraphStyle {
    const fn body() -> Self {
        Self {
            font_size: 11,
            color: TEXT_COLOR,
            weight: FontWeight::Regular,
            alignment: HorizontalAlignment::Left,
            left_indent: 0.0,
            space_before: 0.0,
            space_after: 4.0,
        }
    }

    /// Builds the `genpdf` text style for this paragraph.
    pub fn to_text_style(&self) -> Style {
        let style = Style::new()
            .with_font_size(self.font_size)
            .with_color(self.color);
        match self.weight {
            FontWeight::Regular => style,
            FontWeight::Bold => style.bold(),
            FontWeight::Italic => style.italic(),
        }
    }

    /// Maps the alignment onto the renderer's alignment type.
    pub fn genpdf_alignment(&self) -> Alignment {
        match self.alignment {
            HorizontalAlignment::Left => Alignment::Left,
            HorizontalAlignment::Center => Alignment::Center,
            HorizontalAlignment::Right => Alignment::Right,
        }
    }
}

/// One [`ParagraphStyle`] per [`StyleCategory`].
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSheet {
    title: ParagraphStyle,
    company: ParagraphStyle,
    location: ParagraphStyle,
    experience: ParagraphStyle,
    section_header: ParagraphStyle,
    bullet: ParagraphStyle,
    body: ParagraphStyle,
    footer: ParagraphStyle,
}

impl StyleSheet {
    /// The style set used for job description documents.
    ///
    /// The title's space after includes the 12pt gap that separates it from
    /// the metadata block, and the footer's space before includes the 24pt
    /// gap above it.
    pub fn job_description() -> Self {
        let body = ParagraphStyle::body();
        Self {
            title: ParagraphStyle {
                font_size: 24,
                color: HEADING_COLOR,
                weight: FontWeight::Bold,
                alignment: HorizontalAlignment::Center,
                space_after: 24.0,
                ..body
            },
            company: ParagraphStyle {
                font_size: 16,
                color: ACCENT_COLOR,
                weight: FontWeight::Bold,
                alignment: HorizontalAlignment::Center,
                space_before: 12.0,
                space_after: 6.0,
                ..body
            },
            location: body,
            experience: body,
            section_header: ParagraphStyle {
                font_size: 14,
                color: HEADING_COLOR,
                weight: FontWeight::Bold,
                space_before: 16.0,
                space_after: 8.0,
                ..body
            },
            bullet: ParagraphStyle {
                left_indent: 20.0,
                ..body
            },
            body,
            footer: ParagraphStyle {
                font_size: 9,
                color: FOOTER_COLOR,
                weight: FontWeight::Italic,
                alignment: HorizontalAlignment::Center,
                space_before: 24.0,
                space_after: 0.0,
                ..body
            },
        }
    }

    /// Returns the style applied to `category`.
    pub fn get(&self, category: StyleCategory) -> &ParagraphStyle {
        match category {
            StyleCategory::Title => &self.title,
            StyleCategory::CompanyName => &self.company,
            StyleCategory::LocationInfo => &self.location,
            StyleCategory::ExperienceInfo => &self.experience,
            StyleCategory::SectionHeader => &self.section_header,
            StyleCategory::BulletItem => &self.bullet,
            StyleCategory::BodyText => &self.body,
            StyleCategory::Footer => &self.footer,
        }
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::job_description()
    }
}
