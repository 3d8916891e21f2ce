// locate structural markers and slice the documents into regions

use crate::error::{Document, MergeError, Result};

/// Terminates the meaningful part of a document
pub const END_MARKER: &str = "---- end";
/// Opens the declaration region of a raw document
pub const DECL_MARKER: &str = "---- decl";
/// Opens a code region
pub const CODE_MARKER: &str = "---- code";

fn find_marker(text: &str, marker: &'static str, document: Document) -> Result<usize> {
    text.find(marker)
        .ok_or(MergeError::MarkerNotFound { marker, document })
}

/// Split a document at the first occurrence of a marker. Returns the text
/// before the marker and the text from the marker to the end.
pub fn split_at_marker<'a>(
    text: &'a str,
    marker: &'static str,
    document: Document,
) -> Result<(&'a str, &'a str)> {
    let at = find_marker(text, marker, document)?;
    Ok((&text[..at], &text[at..]))
}

/// Drop the end marker and everything below it. Generators leave scratch
/// output after the terminator that must never reach the compiler.
pub fn truncate_at_end(text: &str, document: Document) -> Result<&str> {
    let (kept, _) = split_at_marker(text, END_MARKER, document)?;
    Ok(kept.trim())
}

/// Declarations of a skeleton document: everything above its first code marker.
pub fn declaration_region(skeleton: &str) -> Result<&str> {
    let (declarations, _) = split_at_marker(skeleton, CODE_MARKER, Document::Skeleton)?;
    Ok(declarations.trim())
}

/// Declarations of a raw document: from its decl marker up to its first code
/// marker. The decl marker line itself stays in the slice; the merger skips
/// it as a non-tensor line. Inverted marker order yields an empty region.
pub fn raw_declaration_region(raw: &str) -> Result<&str> {
    let decl = find_marker(raw, DECL_MARKER, Document::Raw)?;
    let code = find_marker(raw, CODE_MARKER, Document::Raw)?;
    Ok(raw.get(decl..code).unwrap_or_default().trim())
}

/// Code region of a document: from its first code marker to the end.
pub fn code_region(text: &str, document: Document) -> Result<&str> {
    let (_, code) = split_at_marker(text, CODE_MARKER, document)?;
    Ok(code)
}
