//! End-to-end conversion of a job description text file into a PDF.

use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::builder::PdfBuilder;
use crate::classify::classify;
use crate::config::{source_name, ConversionConfig};
use crate::error::{ConvertError, Result};
use crate::model::Story;

/// Summary of a successful conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionReport {
    /// Where the PDF was written.
    pub output: PathBuf,
    /// Number of story elements rendered, spacers included.
    pub elements: usize,
    /// Size of the written file in bytes.
    pub bytes: usize,
}

/// Reads `path` as UTF-8 and classifies its contents.
pub fn classify_file(path: impl AsRef<Path>) -> Result<Story> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).map_err(|err| ConvertError::read_input(path, err))?;
    Ok(classify(&content, &source_name(path)))
}

/// Runs one conversion described by a [`ConversionConfig`].
#[derive(Clone, Debug, Default)]
pub struct Converter {
    config: ConversionConfig,
}

impl Converter {
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Reads, classifies and renders the input, then writes the output file.
    ///
    /// The output is written only once rendering has succeeded, so a failed
    /// run leaves no file behind.
    pub fn try_convert(&self) -> Result<ConversionReport> {
        let input = self.config.input();
        info!("converting {}", input.display());

        let story = classify_file(input)?;
        info!("classified {} story elements", story.len());

        let pdf = PdfBuilder::new(&story)
            .with_layout(*self.config.layout())
            .with_fallback_title(self.config.source_name())
            .render()?;

        let output = self.config.output();
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ConvertError::WriteOutput {
                path: output.to_path_buf(),
                source,
            })?;
        }
        fs::write(output, &pdf.bytes).map_err(|source| ConvertError::WriteOutput {
            path: output.to_path_buf(),
            source,
        })?;

        info!("PDF created: {}", output.display());
        Ok(ConversionReport {
            output: output.to_path_buf(),
            elements: story.len(),
            bytes: pdf.bytes.len(),
        })
    }

    /// Runs the conversion and reports only whether it succeeded.
    ///
    /// Failures are logged with their cause chain.
    pub fn convert(&self) -> bool {
        match self.try_convert() {
            Ok(_) => true,
            Err(err) => {
                error!("{}", error_chain(&err));
                false
            }
        }
    }
}

/// Formats an error and all of its sources on one line.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
