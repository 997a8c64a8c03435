use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use super::ExtractionError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Reads the body paragraphs of a .docx file, one per line, skipping blank ones.
pub fn extract_docx(path: &Path) -> Result<String, ExtractionError> {
    let file = File::open(path)?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractionError::Docx(format!("{DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut xml)?;

    let paragraphs = body_paragraphs(&xml)?;
    Ok(paragraphs
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n"))
}

const BODY_PATH: [&[u8]; 2] = [b"w:document", b"w:body"];

/// Collects the text of the paragraphs directly under `w:body`, reading only the
/// runs each paragraph owns (directly or through a hyperlink).
///
/// Tables, content controls, text boxes and alternate-content fallbacks are not
/// part of the document's paragraph list and are skipped.
fn body_paragraphs(xml: &str) -> Result<Vec<String>, ExtractionError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut in_paragraph = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ExtractionError::Docx(e.to_string()))?;

        match event {
            Event::Start(e) => {
                let name = e.name().as_ref().to_vec();
                if name == b"w:p" && is_body(&stack) {
                    in_paragraph = true;
                }
                stack.push(name);
            }
            Event::End(_) => {
                let closed = stack.pop();
                if in_paragraph && closed.as_deref() == Some(&b"w:p"[..]) && is_body(&stack) {
                    in_paragraph = false;
                    paragraphs.push(std::mem::take(&mut current));
                }
            }
            Event::Empty(e) if in_paragraph && in_own_run(&stack[BODY_PATH.len()..]) => {
                match e.name().as_ref() {
                    b"w:tab" => current.push('\t'),
                    b"w:br" | b"w:cr" => current.push('\n'),
                    _ => {}
                }
            }
            Event::Text(e) if in_paragraph && is_own_text(&stack[BODY_PATH.len()..]) => {
                let text = e
                    .unescape()
                    .map_err(|e| ExtractionError::Docx(e.to_string()))?;
                current.push_str(&text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn is_body(stack: &[Vec<u8>]) -> bool {
    stack.len() == BODY_PATH.len() && stack.iter().zip(BODY_PATH).all(|(a, b)| a.as_slice() == b)
}

/// `path` starts at the paragraph: `w:p/w:r` or `w:p/w:hyperlink/w:r`.
fn in_own_run(path: &[Vec<u8>]) -> bool {
    matches!(
        path.iter().map(Vec::as_slice).collect::<Vec<_>>().as_slice(),
        [b"w:p", b"w:r"] | [b"w:p", b"w:hyperlink", b"w:r"]
    )
}

fn is_own_text(path: &[Vec<u8>]) -> bool {
    match path.split_last() {
        Some((last, run)) => last == b"w:t" && in_own_run(run),
        None => false,
    }
}
