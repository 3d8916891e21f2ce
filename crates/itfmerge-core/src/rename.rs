// rewrite generated tensor names to the skeleton's naming scheme

/// Tensor renames applied to the raw document, in order. Longer index
/// strings come before their prefixes (aaaa before aa) so a pattern is
/// never clobbered by a shorter one that matches first.
pub const RENAMES: &[(&str, &str)] = &[
    ("HAM_D:cc", "g:cc"),
    ("HAM_D:ee", "g:ee"),
    ("HAM_D:aaaa", "K:aaaa"),
    ("HAM_D:aa", "f:aa"),
    ("GAM0:aaaa", "Ym2"),
    ("GAM0:aa", "Ym1"),
    ("T2g:", "T2:"),
];

/// Apply every rename to the raw document text. Each pattern is a plain
/// substring, replaced everywhere it occurs before the next one runs.
pub fn apply_renames(raw: &str) -> String {
    RENAMES
        .iter()
        .fold(raw.to_string(), |text, (from, to)| text.replace(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hamiltonian_blocks_renamed() {
        let text = "load HAM_D:cc[ij]\nload HAM_D:ee[ab]\nload HAM_D:aa[uv]\n";
        let renamed = apply_renames(text);
        assert_eq!(renamed, "load g:cc[ij]\nload g:ee[ab]\nload f:aa[uv]\n");
    }

    #[test]
    fn test_four_index_pattern_wins_over_two_index() {
        // HAM_D:aaaa must become K:aaaa, not f:aaaa
        assert_eq!(apply_renames("HAM_D:aaaa[uvwx]"), "K:aaaa[uvwx]");
        assert_eq!(apply_renames("GAM0:aaaa[uvwx]"), "Ym2[uvwx]");
    }

    #[test]
    fn test_density_matrices_renamed() {
        assert_eq!(apply_renames("load GAM0:aa[uv]"), "load Ym1[uv]");
    }

    #[test]
    fn test_amplitude_prefix_renamed() {
        assert_eq!(
            apply_renames("tensor: T2g:eeaa[abuv], amplitudes"),
            "tensor: T2:eeaa[abuv], amplitudes"
        );
    }

    #[test]
    fn test_every_occurrence_replaced() {
        let text = "T2g:eeaa T2g:eeac T2g:eecc";
        assert_eq!(apply_renames(text), "T2:eeaa T2:eeac T2:eecc");
    }

    #[test]
    fn test_unrelated_text_untouched() {
        let text = "tensor: INTkx:eeaa[abuv], intermediate\nalloc O2:eecc[abij]\n";
        assert_eq!(apply_renames(text), text);
    }
}
