use std::fs;

use jobdesc_pdf::{
    classify_file, fonts, ConversionConfig, ConvertError, Converter, PageLayout, StyleCategory,
};

const JOB_DESCRIPTION: &str = "Senior Engineer
Company: Acme Corp
Location: Remote
Experience Level: 5+ years
Requirements:
• Python
• SQL
";

#[test]
fn missing_input_fails_without_creating_output() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = dir.path().join("out.pdf");
    let config = ConversionConfig::new(dir.path().join("missing.txt")).with_output(&output);

    let converter = Converter::new(config);
    assert!(!converter.convert());
    assert!(!output.exists(), "no PDF should be written for a missing input");

    let err = converter.try_convert().unwrap_err();
    assert!(matches!(err, ConvertError::InputNotFound { .. }));
}

#[test]
fn invalid_utf8_is_a_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("binary.txt");
    fs::write(&input, [0xff, 0xfe, 0x00, 0x80]).expect("write input");

    let err = Converter::new(ConversionConfig::new(&input))
        .try_convert()
        .unwrap_err();
    assert!(matches!(err, ConvertError::ReadInput { .. }));
    assert!(!dir.path().join("binary.pdf").exists());
}

#[test]
fn classifying_a_file_twice_gives_the_same_story() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("job.txt");
    fs::write(&input, JOB_DESCRIPTION).expect("write input");

    let first = classify_file(&input).expect("classify");
    let second = classify_file(&input).expect("classify");
    assert_eq!(first, second);
    assert_eq!(
        first.categories(),
        vec![
            StyleCategory::Title,
            StyleCategory::CompanyName,
            StyleCategory::LocationInfo,
            StyleCategory::ExperienceInfo,
            StyleCategory::SectionHeader,
            StyleCategory::BulletItem,
            StyleCategory::BulletItem,
            StyleCategory::Footer,
        ]
    );
}

#[test]
fn converts_text_file_to_pdf() {
    if !fonts::default_fonts_available() {
        eprintln!("Skipping converts_text_file_to_pdf: fonts missing.");
        return;
    }

    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("job.txt");
    fs::write(&input, JOB_DESCRIPTION).expect("write input");
    let output = dir.path().join("nested").join("job.pdf");

    let report = Converter::new(ConversionConfig::new(&input).with_output(&output))
        .try_convert()
        .expect("conversion succeeds");

    assert_eq!(report.output, output);
    assert_eq!(report.elements, 9);
    let bytes = fs::read(&output).expect("read output");
    assert_eq!(bytes.len(), report.bytes);
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn unwritable_output_reports_failure() {
    if !fonts::default_fonts_available() {
        eprintln!("Skipping unwritable_output_reports_failure: fonts missing.");
        return;
    }

    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("job.txt");
    fs::write(&input, JOB_DESCRIPTION).expect("write input");

    // The output path is an existing directory.
    let converter = Converter::new(ConversionConfig::new(&input).with_output(dir.path()));
    assert!(!converter.convert());
    assert!(matches!(
        converter.try_convert().unwrap_err(),
        ConvertError::WriteOutput { .. }
    ));
}

#[test]
fn render_failure_leaves_no_output() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("job.txt");
    fs::write(&input, JOB_DESCRIPTION).expect("write input");
    let output = dir.path().join("job.pdf");

    // 1000pt on each side is wider than an A4 sheet.
    let layout = PageLayout {
        margin_pt: 1000.0,
        ..PageLayout::a4()
    };
    let converter =
        Converter::new(ConversionConfig::new(&input).with_output(&output).with_layout(layout));

    assert!(!converter.convert());
    assert!(matches!(
        converter.try_convert().unwrap_err(),
        ConvertError::Render(_)
    ));
    assert!(!output.exists(), "no PDF should be written when rendering fails");
}

#[test]
fn missing_fonts_leave_no_output() {
    if fonts::default_fonts_available() {
        eprintln!("Skipping missing_fonts_leave_no_output: fonts are installed.");
        return;
    }

    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("job.txt");
    fs::write(&input, JOB_DESCRIPTION).expect("write input");
    let output = dir.path().join("job.pdf");

    let converter = Converter::new(ConversionConfig::new(&input).with_output(&output));
    assert!(!converter.convert());
    assert!(matches!(
        converter.try_convert().unwrap_err(),
        ConvertError::FontsUnavailable(_)
    ));
    assert!(!output.exists());
}
