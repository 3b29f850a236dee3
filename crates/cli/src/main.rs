use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::LevelFilter;

use jobdesc_pdf::config::DEFAULT_INPUT_PATH;
use jobdesc_pdf::{classify_file, fonts, ConversionConfig, Converter, JobOutline};

/// Converts a plain-text job description into a styled PDF.
///
/// Fonts are looked up under `assets/fonts`, the directory named by
/// `JOBDESC_PDF_FONTS_DIR`, or a system Liberation Sans install.
#[derive(Parser)]
#[command(author, version, about = "Render a job description text file as a PDF")]
struct Cli {
    /// Job description text file.
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Output PDF path. Defaults to the input path with a `.pdf` extension.
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Print the recognised fields and sections instead of rendering.
    #[arg(long)]
    outline: bool,

    /// Log every classified line.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.outline {
        match classify_file(&cli.input) {
            Ok(story) => print!("{}", JobOutline::from_story(&story)),
            Err(err) => {
                eprintln!("Error: {}", err);
                print_error_sources(&err);
                process::exit(1);
            }
        }
        return;
    }

    if !fonts::default_fonts_available() {
        eprintln!("Error: no fonts available for PDF rendering.");
        eprintln!("{}", fonts::install_instructions());
        eprintln!("Then run this command again.");
        process::exit(1);
    }

    let mut config = ConversionConfig::new(cli.input);
    if let Some(output) = cli.output {
        config = config.with_output(output);
    }

    println!("Converting {} to PDF...", config.input().display());
    match Converter::new(config).try_convert() {
        Ok(report) => {
            println!(
                "PDF successfully created: {} ({} bytes, {} elements)",
                report.output.display(),
                report.bytes,
                report.elements
            );
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            print_error_sources(&err);
            eprintln!("Conversion failed.");
            process::exit(1);
        }
    }
}
