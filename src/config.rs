//! Conversion settings: file locations and page geometry.

use std::path::{Path, PathBuf};

use genpdf::error::{Error, ErrorKind};
use genpdf::{Margins, PaperSize, Size};

use crate::elements::{mm_to_f64, points_to_mm};

/// Input used when no path is given on the command line.
pub const DEFAULT_INPUT_PATH: &str = "src/main/resources/docs/high_match_job_description.txt";

/// Page margin on every side, in points.
pub const DEFAULT_MARGIN_PT: f64 = 72.0;

/// Paper size and margins of the generated document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageLayout {
    /// Paper size in millimetres.
    pub paper_size: Size,
    /// Margin on every side, in points.
    pub margin_pt: f64,
}

impl PageLayout {
    /// A4 paper with one-inch margins.
    pub fn a4() -> Self {
        Self {
            paper_size: PaperSize::A4.into(),
            margin_pt: DEFAULT_MARGIN_PT,
        }
    }

    /// Returns the margins as `genpdf` page margins.
    pub fn margins(&self) -> Margins {
        Margins::all(points_to_mm(self.margin_pt))
    }

    /// Fails when the margins leave no room for content on the page.
    pub fn check_printable_area(&self) -> Result<(), Error> {
        let margins = 2.0 * mm_to_f64(points_to_mm(self.margin_pt));
        let width = mm_to_f64(self.paper_size.width) - margins;
        let height = mm_to_f64(self.paper_size.height) - margins;

        if width > 0.0 && height > 0.0 {
            Ok(())
        } else {
            Err(Error::new(
                format!(
                    "Page margins of {}pt leave no printable area on a {:.1}x{:.1}mm page",
                    self.margin_pt,
                    mm_to_f64(self.paper_size.width),
                    mm_to_f64(self.paper_size.height)
                ),
                ErrorKind::PageSizeExceeded,
            ))
        }
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::a4()
    }
}

/// Everything a single conversion run needs.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionConfig {
    input: PathBuf,
    output: PathBuf,
    layout: PageLayout,
}

impl ConversionConfig {
    /// Creates a configuration writing next to `input` with a `.pdf` extension.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let output = default_output_path(&input);
        Self {
            input,
            output,
            layout: PageLayout::a4(),
        }
    }

    /// Overrides the output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Overrides the page layout.
    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// File name of the input, used in the generated footer.
    pub fn source_name(&self) -> String {
        source_name(&self.input)
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH)
    }
}

/// Returns `input` with its extension replaced by `pdf`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("pdf")
}

/// Returns the file name component of `path`, or the whole path if it has none.
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
