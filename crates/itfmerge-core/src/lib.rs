pub mod assemble;
pub mod error;
pub mod merge;
pub mod rename;
pub mod section;

pub use error::{Document, MergeError};

use anyhow::Context;
use camino::Utf8Path;
use std::fs;

/// Merge a machine-generated raw ITF document into a hand-written skeleton
/// document and return the combined text. Pure text-to-text transformation;
/// reading and writing stay in the wrappers below.
pub fn combine(raw_text: &str, skeleton_text: &str) -> Result<String, MergeError> {
    let renamed = rename::apply_renames(raw_text);

    let raw = section::truncate_at_end(&renamed, Document::Raw)?;
    let skeleton = section::truncate_at_end(skeleton_text, Document::Skeleton)?;

    let declarations = merge::merge_declarations(
        section::declaration_region(skeleton)?,
        section::raw_declaration_region(raw)?,
    );

    let skeleton_code = section::code_region(skeleton, Document::Skeleton)?;
    let raw_code = section::code_region(raw, Document::Raw)?;

    Ok(assemble::assemble_document(
        &declarations,
        skeleton_code,
        raw_code,
    ))
}

/// Read the raw ITF file and the skeleton file, combine them
pub fn combine_files(itf_path: &Utf8Path, skeleton_path: &Utf8Path) -> anyhow::Result<String> {
    let raw = fs::read_to_string(itf_path)
        .with_context(|| format!("Failed to read ITF file: {}", itf_path))?;
    let skeleton = fs::read_to_string(skeleton_path)
        .with_context(|| format!("Failed to read skeleton file: {}", skeleton_path))?;

    Ok(combine(&raw, &skeleton)?)
}

/// Combine two files and write the result to stdout
pub fn cmd_combine(itf_path: &Utf8Path, skeleton_path: &Utf8Path) -> anyhow::Result<()> {
    let combined = combine_files(itf_path, skeleton_path)?;

    // stdout carries nothing but the document; the compiler consumes it
    print!("{}", combined);

    Ok(())
}
