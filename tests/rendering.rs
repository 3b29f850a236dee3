use jobdesc_pdf::builder::PdfBuilder;
use jobdesc_pdf::classify;
use jobdesc_pdf::fonts;
use sha2::{Digest, Sha256};

const JOB_DESCRIPTION: &str = "Senior Data Engineer
Company: Acme Corp
Location: Remote
Experience Level: 5+ years

We are looking for an engineer to own our data platform.

Requirements:
• Python
• SQL
• Nice to have:

Responsibilities:
• Design pipelines
";

const NON_LATIN_DESCRIPTION: &str = "Inżynier Danych
Company: Łódź Analytics
Location: Kraków → Remote
Requirements:
• Python → Rust, ≥ 3 lata
• Ελληνικά και Русский
";

fn render_sample_pdf() -> Option<Vec<u8>> {
    if !fonts::default_fonts_available() {
        return None;
    }

    let story = classify(JOB_DESCRIPTION, "job.txt");
    let bytes = PdfBuilder::new(&story)
        .render()
        .expect("render sample pdf")
        .bytes;

    Some(bytes)
}

/// Byte ranges printpdf fills with the clock or a random document id.
const VOLATILE_FIELDS: &[(&[u8], &[u8])] = &[
    (b"/CreationDate", b")"),
    (b"/ModDate", b")"),
    (b"/ID", b"]"),
    (b"<xmp:CreateDate>", b"</"),
    (b"<xmp:ModifyDate>", b"</"),
    (b"<xmp:MetadataDate>", b"</"),
    (b"<xmpMM:DocumentID>", b"</"),
    (b"<xmpMM:InstanceID>", b"</"),
];

fn find(data: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    data.get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|pos| from + pos)
}

/// Blanks every volatile field so two renders can be compared byte for byte.
fn scrub_pdf(bytes: &[u8]) -> Vec<u8> {
    let mut data = bytes.to_vec();
    for (start, end) in VOLATILE_FIELDS {
        let mut offset = 0;
        while let Some(pos) = find(&data, start, offset) {
            let value_start = pos + start.len();
            let Some(value_end) = find(&data, end, value_start) else {
                break;
            };
            data[value_start..value_end].fill(b'0');
            offset = value_end + end.len();
        }
    }
    data
}

fn normalized_hash(bytes: &[u8]) -> [u8; 32] {
    let normalized = scrub_pdf(bytes);
    let digest = Sha256::digest(&normalized);
    digest.into()
}

#[test]
fn renders_pdf_document() {
    let Some(bytes) = render_sample_pdf() else {
        eprintln!(
            "Skipping renders_pdf_document: fonts missing. Set JOBDESC_PDF_FONTS_DIR or install Liberation Sans."
        );
        return;
    };
    assert!(bytes.starts_with(b"%PDF-"), "output should start with a PDF header");
}

#[test]
fn rendering_is_deterministic() {
    let Some(bytes_a) = render_sample_pdf() else {
        eprintln!(
            "Skipping rendering_is_deterministic: fonts missing. Set JOBDESC_PDF_FONTS_DIR or install Liberation Sans."
        );
        return;
    };
    let Some(bytes_b) = render_sample_pdf() else {
        return;
    };

    assert_eq!(bytes_a.len(), bytes_b.len(), "PDF sizes should match");

    let hash_a = normalized_hash(&bytes_a);
    let hash_b = normalized_hash(&bytes_b);

    assert_eq!(
        hash_a, hash_b,
        "PDF renders must be deterministic after metadata normalization"
    );
}

#[test]
fn renders_characters_outside_windows_1252() {
    if !fonts::default_fonts_available() {
        eprintln!("Skipping renders_characters_outside_windows_1252: fonts missing.");
        return;
    }

    let story = classify(NON_LATIN_DESCRIPTION, "praca.txt");
    let pdf = PdfBuilder::new(&story)
        .render()
        .expect("embedded fonts render any character they cover");
    assert!(pdf.bytes.starts_with(b"%PDF-"));
}

#[test]
fn scrubbing_blanks_timestamps_only() {
    let a = scrub_pdf(b"/Title(Job)/CreationDate(D:20240101120000)/ID[<ab12><cd34>]");
    let b = scrub_pdf(b"/Title(Job)/CreationDate(D:20250202130101)/ID[<ef56><0a78>]");
    assert_eq!(a, b);
    assert!(a.starts_with(b"/Title(Job)"));
}
