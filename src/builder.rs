//! Document construction: turns a [`Story`] into PDF bytes.

use genpdf::error::Error;
use genpdf::fonts::{FontData, FontFamily};
use genpdf::{self, Margins, SimplePageDecorator, Size};
use log::{debug, info};

use crate::config::PageLayout;
use crate::elements::{styled_paragraph, VerticalSpace};
use crate::error::{ConvertError, Result};
use crate::fonts;
use crate::model::{Story, StoryElement};
use crate::style::StyleSheet;

/// Builder for `genpdf::Document` instances with the page setup applied.
#[derive(Default)]
pub struct DocumentBuilder {
    paper_size: Option<Size>,
    margins: Option<Margins>,
    title: Option<String>,
    font_family: Option<FontFamily<FontData>>,
}

impl DocumentBuilder {
    /// Creates a new builder instance with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the paper size used for newly created documents.
    pub fn with_paper_size(mut self, paper_size: impl Into<Size>) -> Self {
        self.paper_size = Some(paper_size.into());
        self
    }

    /// Sets the margins applied through the page decorator.
    pub fn with_margins(mut self, margins: impl Into<Margins>) -> Self {
        self.margins = Some(margins.into());
        self
    }

    /// Sets the document title stored in the PDF metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Uses `family` instead of resolving [`fonts::default_font_family`].
    pub fn with_font_family(mut self, family: FontFamily<FontData>) -> Self {
        self.font_family = Some(family);
        self
    }

    /// Builds a configured `genpdf::Document`.
    pub fn build(self) -> std::result::Result<genpdf::Document, Error> {
        let font_family = match self.font_family {
            Some(family) => family,
            None => fonts::default_font_family()?,
        };
        let mut document = genpdf::Document::new(font_family);

        if let Some(paper_size) = self.paper_size {
            document.set_paper_size(paper_size);
        }

        if let Some(title) = self.title {
            document.set_title(title);
        }

        let mut decorator = SimplePageDecorator::new();
        if let Some(margins) = self.margins {
            decorator.set_margins(margins);
        }
        document.set_page_decorator(decorator);

        Ok(document)
    }
}

/// A rendered PDF held in memory.
#[derive(Clone, Debug)]
pub struct RenderedPdf {
    /// The complete PDF file contents.
    pub bytes: Vec<u8>,
}

/// Lays out a story with a style sheet and page layout.
pub struct PdfBuilder<'a> {
    story: &'a Story,
    styles: StyleSheet,
    layout: PageLayout,
    title: Option<String>,
    fallback_title: Option<String>,
    font_family: Option<FontFamily<FontData>>,
}

impl<'a> PdfBuilder<'a> {
    /// Creates a builder for `story` with the job description styles on A4.
    pub fn new(story: &'a Story) -> Self {
        Self {
            story,
            styles: StyleSheet::job_description(),
            layout: PageLayout::a4(),
            title: None,
            fallback_title: None,
            font_family: None,
        }
    }

    /// Overrides the page layout.
    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Overrides the metadata title. Defaults to the story's title line.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the metadata title used when the story has no title line.
    pub fn with_fallback_title(mut self, title: impl Into<String>) -> Self {
        self.fallback_title = Some(title.into());
        self
    }

    /// Returns the metadata title: the explicit title, else the story's title
    /// line, else the fallback title.
    pub fn document_title(&self) -> Option<String> {
        self.title
            .clone()
            .or_else(|| self.story.title().map(str::to_owned))
            .or_else(|| self.fallback_title.clone())
    }

    /// Uses an already loaded font family.
    pub fn with_font_family(mut self, family: FontFamily<FontData>) -> Self {
        self.font_family = Some(family);
        self
    }

    fn document(&mut self) -> Result<genpdf::Document> {
        let mut builder = DocumentBuilder::new()
            .with_paper_size(self.layout.paper_size)
            .with_margins(self.layout.margins());

        if let Some(title) = self.document_title() {
            builder = builder.with_title(title);
        }

        let family = match self.font_family.take() {
            Some(family) => family,
            None => fonts::default_font_family().map_err(ConvertError::FontsUnavailable)?,
        };

        builder
            .with_font_family(family)
            .build()
            .map_err(ConvertError::Render)
    }

    /// Renders the story into PDF bytes.
    pub fn render(mut self) -> Result<RenderedPdf> {
        self.layout
            .check_printable_area()
            .map_err(ConvertError::Render)?;
        let mut document = self.document()?;

        for element in self.story {
            match element {
                StoryElement::Line(line) => {
                    debug!("pushing {} paragraph: {}", line.category(), line.text());
                    document.push(styled_paragraph(line, self.styles.get(line.category())));
                }
                StoryElement::Spacer(points) => {
                    document.push(VerticalSpace::from_points(*points));
                }
            }
        }

        let mut bytes = Vec::new();
        document.render(&mut bytes).map_err(ConvertError::Render)?;
        info!(
            "rendered {} story elements into {} bytes",
            self.story.len(),
            bytes.len()
        );

        Ok(RenderedPdf { bytes })
    }
}
