// stitch the merged regions into the final document, injecting defaults

use crate::section::END_MARKER;

/// Probe for a hand-written Update_INTkx code block
pub const UPDATE_INTKX_LABEL: &str = r#"code("Update_INTkx")"#;
/// Probe for a hand-written Sum_T1 code block
pub const SUM_T1_LABEL: &str = r#"code("Sum_T1")"#;

/// Default block zeroing the INTkx intermediates, injected when no code
/// section carries the Update_INTkx label
const UPDATE_INTKX_BLOCK: &str = r#"
---- code("Update_INTkx")
# Set INTkx tensors to zero
alloc INTkx:eeaa[abuv]
store INTkx:eeaa[abuv]

alloc INTkx:eeac[abui]
store INTkx:eeac[abui]

alloc INTkx:eecc[abij]
store INTkx:eecc[abij]

"#;

/// Default block accumulating the singles residual, injected when no code
/// section carries the Sum_T1 label
const SUM_T1_BLOCK: &str = r#"
---- code("Sum_T1")
alloc T1s:ec[ai]
load T1:ec[ai]
.T1s:ec[ai] += T1:ec[ai]
drop T1:ec[ai]
load T2:ec[ai]
.T1s:ec[ai] += T2:ec[ai]
drop T2:ec[ai]
store T1s:ec[ai]
"#;

/// Concatenate the merged declarations with both code regions, append any
/// missing default blocks, and close the document with the end marker.
/// The label probes run over the whole document assembled so far,
/// declarations included, so a label anywhere suppresses its block.
pub fn assemble_document(declarations: &str, skeleton_code: &str, raw_code: &str) -> String {
    let mut itf = String::new();

    itf.push_str(declarations);
    itf.push('\n');
    itf.push_str(skeleton_code);
    itf.push_str("\n\n");
    itf.push_str(raw_code);
    itf.push('\n');

    if !itf.contains(UPDATE_INTKX_LABEL) {
        itf.push_str(UPDATE_INTKX_BLOCK);
    }
    if !itf.contains(SUM_T1_LABEL) {
        itf.push_str(SUM_T1_BLOCK);
    }

    itf.push_str("\n\n");
    itf.push_str(END_MARKER);
    itf.push('\n');

    itf
}
