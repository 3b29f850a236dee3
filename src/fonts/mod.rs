//! Font loading for the renderer.
//!
//! `genpdf` needs TrueType fonts to lay out text.  The converter uses the
//! Liberation Sans family, which is metric-compatible with Helvetica.  The font
//! files are embedded into the generated PDF so any character the font covers
//! can be printed, not only the Windows-1252 subset of the built-in fonts.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::{Error, ErrorKind};
use genpdf::fonts::{self, FontData, FontFamily};
use log::{debug, warn};

/// Name of the font family searched for in the font directories.
pub const DEFAULT_FONT_FAMILY_NAME: &str = "LiberationSans";

/// Environment variable overriding the font directory.
pub const FONTS_DIR_ENV: &str = "JOBDESC_PDF_FONTS_DIR";

/// Environment variable overriding the Windows fallback font directory.
pub const WINDOWS_FONTS_DIR_ENV: &str = "JOBDESC_PDF_WINDOWS_FONTS_DIR";

const FONT_FILES: &[&str] = &[
    "LiberationSans-Regular.ttf",
    "LiberationSans-Bold.ttf",
    "LiberationSans-Italic.ttf",
    "LiberationSans-BoldItalic.ttf",
];

/// Install locations of Liberation Sans on common Linux distributions.
const SYSTEM_FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/truetype/liberation2",
    "/usr/share/fonts/liberation-sans",
    "/usr/share/fonts/liberation",
    "/usr/share/fonts/TTF",
];

const WINDOWS_FALLBACK_FAMILY_NAME: &str = "Arial";

struct WindowsFontFiles {
    regular: &'static str,
    bold: &'static str,
    italic: &'static str,
    bold_italic: &'static str,
}

const WINDOWS_FONT_FILES: WindowsFontFiles = WindowsFontFiles {
    regular: "arial.ttf",
    bold: "arialbd.ttf",
    italic: "ariali.ttf",
    bold_italic: "arialbi.ttf",
};

/// Returns the `assets/fonts` directory of the crate sources.
pub fn bundled_fonts_source_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts")
}

fn env_path(var: &str) -> Option<PathBuf> {
    env::var_os(var).and_then(|value| {
        let path = PathBuf::from(value);
        if path.as_os_str().is_empty() {
            None
        } else {
            Some(path)
        }
    })
}

fn push_unique(candidates: &mut Vec<PathBuf>, candidate: PathBuf) {
    if !candidates.iter().any(|existing| existing == &candidate) {
        candidates.push(candidate);
    }
}

fn font_directory_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = env_path(FONTS_DIR_ENV) {
        candidates.push(path);
    }

    if let Ok(current_exe) = env::current_exe() {
        if let Some(bin_dir) = current_exe.parent() {
            push_unique(&mut candidates, bin_dir.join("assets/fonts"));
        }
    }

    push_unique(&mut candidates, bundled_fonts_source_dir());
    candidates
}

fn missing_font_files(path: &Path) -> Vec<PathBuf> {
    FONT_FILES
        .iter()
        .map(|name| path.join(name))
        .filter(|candidate| !candidate.is_file())
        .collect()
}

fn find_complete_directory<I>(candidates: I) -> Result<PathBuf, Vec<String>>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut attempts = Vec::new();

    for candidate in candidates {
        let exists = candidate.is_dir();
        let missing = missing_font_files(&candidate);

        if exists && missing.is_empty() {
            return Ok(candidate);
        }

        let reason = if !exists {
            format!("directory missing at {}", candidate.display())
        } else {
            let missing_list = missing
                .iter()
                .map(|path| path.file_name().unwrap_or_default().to_string_lossy())
                .collect::<Vec<_>>()
                .join(", ");
            format!("missing files [{}]", missing_list)
        };

        attempts.push(format!("{} ({})", candidate.display(), reason));
    }

    Err(attempts)
}

fn resolve_font_directory() -> Result<PathBuf, Error> {
    let attempts = match find_complete_directory(font_directory_candidates()) {
        Ok(directory) => return Ok(directory),
        Err(attempts) => attempts,
    };

    let summary = if attempts.is_empty() {
        "no search paths were available".to_owned()
    } else {
        attempts.join(", ")
    };

    Err(Error::new(
        format!(
            "Unable to locate the {} font directory. Checked: {}. Set {} or copy the fonts to assets/fonts.",
            DEFAULT_FONT_FAMILY_NAME, summary, FONTS_DIR_ENV
        ),
        io::Error::new(io::ErrorKind::NotFound, "font directory not found"),
    ))
}

fn load_family_from(directory: &Path) -> Result<FontFamily<FontData>, Error> {
    debug!("loading {} fonts from {}", DEFAULT_FONT_FAMILY_NAME, directory.display());
    fonts::from_files(directory, DEFAULT_FONT_FAMILY_NAME, None).map_err(|err| {
        Error::new(
            format!(
                "Failed to load font family '{}' from {}: {}",
                DEFAULT_FONT_FAMILY_NAME,
                directory.display(),
                err
            ),
            io::Error::new(io::ErrorKind::Other, err.to_string()),
        )
    })
}

fn system_font_family() -> Result<FontFamily<FontData>, Error> {
    let candidates = SYSTEM_FONT_DIRS.iter().map(PathBuf::from);
    match find_complete_directory(candidates) {
        Ok(directory) => load_family_from(&directory),
        Err(_) => Err(Error::new(
            format!("{} is not installed system-wide", DEFAULT_FONT_FAMILY_NAME),
            io::Error::new(io::ErrorKind::NotFound, "system fonts not found"),
        )),
    }
}

fn windows_font_directory() -> Option<PathBuf> {
    if let Some(path) = env_path(WINDOWS_FONTS_DIR_ENV) {
        return Some(path);
    }

    #[cfg(windows)]
    {
        for var in ["WINDIR", "SystemRoot"] {
            if let Some(root) = env_path(var) {
                let candidate = root.join("Fonts");
                if candidate.is_dir() {
                    return Some(candidate);
                }
            }
        }
    }

    None
}

fn load_windows_font(directory: &Path, file: &str, style: &str) -> Result<FontData, Error> {
    let path = directory.join(file);
    FontData::load(&path, None).map_err(|err| {
        let io_kind = if path.is_file() {
            io::ErrorKind::Other
        } else {
            io::ErrorKind::NotFound
        };
        Error::new(
            format!(
                "Failed to load Windows fallback {} font at {}: {}",
                style,
                path.display(),
                err
            ),
            io::Error::new(io_kind, err.to_string()),
        )
    })
}

fn windows_fallback_font_family() -> Result<FontFamily<FontData>, Error> {
    let directory = windows_font_directory().ok_or_else(|| {
        Error::new(
            "Windows font directory not found for fallback",
            io::Error::new(io::ErrorKind::NotFound, "windows fonts directory not found"),
        )
    })?;

    Ok(FontFamily {
        regular: load_windows_font(&directory, WINDOWS_FONT_FILES.regular, "regular")?,
        bold: load_windows_font(&directory, WINDOWS_FONT_FILES.bold, "bold")?,
        italic: load_windows_font(&directory, WINDOWS_FONT_FILES.italic, "italic")?,
        bold_italic: load_windows_font(&directory, WINDOWS_FONT_FILES.bold_italic, "bold italic")?,
    })
}

/// Returns whether `err` means the font files are absent rather than broken.
pub fn fonts_missing(err: &Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::IoError(io_err)
            if io_err.kind() == io::ErrorKind::NotFound
                || io_err.kind() == io::ErrorKind::PermissionDenied
    )
}

fn fallback_font_family(primary: &Error) -> Result<FontFamily<FontData>, Error> {
    match system_font_family() {
        Ok(family) => {
            warn!(
                "Bundled fonts unavailable ({}); using the system {} install.",
                primary, DEFAULT_FONT_FAMILY_NAME
            );
            return Ok(family);
        }
        Err(err) if !fonts_missing(&err) => return Err(err),
        Err(_) => {}
    }

    match windows_fallback_font_family() {
        Ok(family) => {
            warn!(
                "Bundled fonts unavailable ({}); falling back to Windows '{}' family.",
                primary, WINDOWS_FALLBACK_FAMILY_NAME
            );
            Ok(family)
        }
        Err(fallback_err) => {
            warn!(
                "Bundled fonts unavailable ({}); Windows fallback failed: {}",
                primary, fallback_err
            );
            Err(Error::new(
                format!(
                    "No usable fonts found. {} Windows fallback: {}",
                    primary, fallback_err
                ),
                io::Error::new(io::ErrorKind::NotFound, "default fonts are not available"),
            ))
        }
    }
}

/// Returns the font family used for job description documents.
///
/// Search order: [`FONTS_DIR_ENV`], `assets/fonts` next to the executable,
/// `assets/fonts` in the crate sources, the system Liberation Sans install,
/// and finally the Windows Arial family.
pub fn default_font_family() -> Result<FontFamily<FontData>, Error> {
    match resolve_font_directory() {
        Ok(directory) => load_family_from(&directory),
        Err(err) if fonts_missing(&err) => fallback_font_family(&err),
        Err(err) => Err(err),
    }
}

/// Indicates whether any font source required by [`default_font_family`] is present on disk.
pub fn default_fonts_available() -> bool {
    resolve_font_directory().is_ok()
        || find_complete_directory(SYSTEM_FONT_DIRS.iter().map(PathBuf::from)).is_ok()
        || windows_font_directory()
            .map(|directory| directory.join(WINDOWS_FONT_FILES.regular).is_file())
            .unwrap_or(false)
}

/// Installation hint printed when no fonts can be found.
pub fn install_instructions() -> String {
    format!(
        "Install the Liberation Sans fonts (e.g. `apt install fonts-liberation` or \
         `dnf install liberation-sans-fonts`), or copy {} into {} or a directory \
         named by {}.",
        FONT_FILES.join(", "),
        bundled_fonts_source_dir().display(),
        FONTS_DIR_ENV
    )
}
