//! Renders plain-text job descriptions as styled PDF documents.
//!
//! Each line of the input is classified ([`classify`]) into a
//! [`model::StyleCategory`], mapped to a fixed paragraph style
//! ([`style::StyleSheet`]) and laid out with `genpdf` ([`builder`]).

pub mod builder;
pub mod classify;
pub mod config;
pub mod convert;
pub mod elements;
pub mod error;
pub mod fonts;
pub mod model;
pub mod outline;
pub mod style;

pub use classify::classify;
pub use config::{ConversionConfig, PageLayout};
pub use convert::{classify_file, ConversionReport, Converter};
pub use error::{ConvertError, Result};
pub use model::{Story, StoryElement, StyleCategory, StyledLine};
pub use outline::JobOutline;
