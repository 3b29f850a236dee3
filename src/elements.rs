//! Element implementations used to lay out a story with `genpdf`.
//!
//! Styled lines become padded paragraphs; spacing markers become a fixed
//! block of vertical space, which `genpdf` does not ship with.

use genpdf::elements::{PaddedElement, Paragraph};
use genpdf::error::Error;
use genpdf::style::{Style, StyledString};
use genpdf::{render, Element, Margins, Mm, RenderResult, Size};

use crate::model::StyledLine;
use crate::style::ParagraphStyle;

const MM_PER_POINT: f64 = 25.4 / 72.0;

pub(crate) fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

pub(crate) fn mm_to_f64(value: Mm) -> f64 {
    let mm: printpdf::Mm = value.into();
    mm.0
}

/// Converts a length in PDF points to millimetres.
pub fn points_to_mm(points: f64) -> Mm {
    mm_from_f64(points * MM_PER_POINT)
}

/// Builds the paragraph for `line` with indent and paragraph spacing applied as padding.
pub fn styled_paragraph(line: &StyledLine, style: &ParagraphStyle) -> PaddedElement<Paragraph> {
    let mut paragraph = Paragraph::new(StyledString::new(
        line.text().to_owned(),
        style.to_text_style(),
    ));
    paragraph.set_alignment(style.genpdf_alignment());

    paragraph.padded(Margins::trbl(
        points_to_mm(style.space_before),
        Mm::default(),
        points_to_mm(style.space_after),
        points_to_mm(style.left_indent),
    ))
}

/// A fixed amount of blank vertical space.
///
/// Space that does not fit on the current page is dropped rather than carried
/// over, so a spacer never produces a leading gap on the next page.
#[derive(Clone, Copy, Debug)]
pub struct VerticalSpace {
    height: Mm,
}

impl VerticalSpace {
    /// Creates a spacer of the given height.
    pub fn new(height: impl Into<Mm>) -> Self {
        Self {
            height: height.into(),
        }
    }

    /// Creates a spacer from a height in points.
    pub fn from_points(points: f64) -> Self {
        Self::new(points_to_mm(points))
    }

    /// Returns the height of the spacer.
    pub fn height(&self) -> Mm {
        self.height
    }
}

impl Element for VerticalSpace {
    fn render(
        &mut self,
        _context: &genpdf::Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let available = area.size().height;
        let height = if mm_to_f64(self.height) > mm_to_f64(available) {
            available
        } else {
            self.height
        };

        let mut result = RenderResult::default();
        result.size = Size::new(0, height);
        Ok(result)
    }
}
