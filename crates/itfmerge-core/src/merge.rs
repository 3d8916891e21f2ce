// fold raw tensor declarations into the skeleton's declaration block

const TENSOR_PREFIX: &str = "tensor:";

/// Slice identifying a tensor up to and including its first index bracket.
/// Two declarations with one signature name the same tensor even when their
/// index labels or creation attributes differ. A line without a bracket
/// stands in for itself whole.
fn tensor_signature(line: &str) -> &str {
    match line.find('[') {
        Some(bracket) => &line[..=bracket],
        None => line,
    }
}

/// Append to the skeleton's declarations every raw `tensor:` line whose
/// signature the block does not already contain. Containment is checked
/// against the growing block, so the first raw occurrence of a signature
/// masks all later ones. Non-tensor lines (the decl marker, index-space
/// lines, blanks) are passed over.
pub fn merge_declarations(declarations: &str, raw_declarations: &str) -> String {
    let mut merged = declarations.to_string();

    for line in raw_declarations.lines() {
        if !line.starts_with(TENSOR_PREFIX) {
            continue;
        }

        if !merged.contains(tensor_signature(line)) {
            merged.push('\n');
            merged.push_str(line);
        }
    }

    merged
}
