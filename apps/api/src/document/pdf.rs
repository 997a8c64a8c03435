use std::panic;
use std::path::Path;

use super::ExtractionError;

/// Extracts text from every page of a PDF and joins the pages with a newline.
///
/// pdf-extract panics on some malformed inputs; a panic is reported as a
/// `Pdf` error like any other parse failure.
pub fn extract_pdf(path: &Path) -> Result<String, ExtractionError> {
    let bytes = std::fs::read(path)?;

    let pages = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(&bytes))
        .map_err(|_| ExtractionError::Pdf("parser panicked on malformed document".to_string()))?
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    // Each page's output opens with the line breaks pdf-extract emits before
    // its first glyph.
    Ok(pages
        .iter()
        .map(|page| page.trim())
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A minimal two-page PDF with one Helvetica line per page.
    pub(crate) fn two_page_pdf(first: &str, second: &str) -> Vec<u8> {
        let content = |text: &str| {
            let ops = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
            format!("<< /Length {} >>\nstream\n{ops}\nendstream", ops.len())
        };
        let page = |contents: u32| {
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 5 0 R >> >> /Contents {contents} 0 R >>"
            )
        };
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R 4 0 R] /Count 2 >>".to_string(),
            page(6),
            page(7),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
            content(first),
            content(second),
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, object) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend(format!("{} 0 obj\n{object}\nendobj\n", i + 1).as_bytes());
        }

        let xref = pdf.len();
        pdf.extend(format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).as_bytes());
        for offset in offsets {
            pdf.extend(format!("{offset:010} 00000 n \n").as_bytes());
        }
        pdf.extend(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref}\n%%EOF\n",
                objects.len() + 1
            )
            .as_bytes(),
        );
        pdf
    }

    #[test]
    fn test_extract_pdf_joins_pages_with_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, two_page_pdf("PageOne", "PageTwo")).unwrap();
        assert_eq!(extract_pdf(&path).unwrap(), "PageOne\nPageTwo");
    }

    #[test]
    fn test_extract_pdf_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"%PDF-1.4 truncated").unwrap();
        assert!(matches!(extract_pdf(&path), Err(ExtractionError::Pdf(_))));
    }
}
