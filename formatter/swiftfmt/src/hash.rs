//! Cache fingerprint for the external caching front end.
//!
//! The fingerprint covers the raw source plus every option that can affect
//! formatted output, so any two inputs that would format differently get
//! different fingerprints (up to 64-bit collision odds). Hashing is a single
//! pass over the text, far cheaper than formatting it.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::options::{FileHeader, FormatOptions};

/// Fingerprint `source` under `options`.
#[must_use]
pub fn cache_fingerprint(source: &str, options: &FormatOptions) -> u64 {
    let mut hasher = FxHasher::default();
    source.hash(&mut hasher);
    options.indent.hash(&mut hasher);
    options.linebreak.hash(&mut hasher);
    options.fragment.hash(&mut hasher);
    options.ignore_conflict_markers.hash(&mut hasher);
    options.tab_width.hash(&mut hasher);
    match &options.file_header {
        FileHeader::Ignore => 0u8.hash(&mut hasher),
        FileHeader::Text(text) => {
            1u8.hash(&mut hasher);
            text.hash(&mut hasher);
        }
    }
    options.swift_version.hash(&mut hasher);
    // map iteration order is unspecified; hash in sorted order
    let mut extra: Vec<_> = options.extra.iter().collect();
    extra.sort();
    extra.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::cache_fingerprint;
    use crate::options::{FileHeader, FormatOptions};

    fn fingerprint(source: &str) -> u64 {
        cache_fingerprint(source, &FormatOptions::default())
    }

    #[test]
    fn identical_inputs_collide() {
        assert_eq!(fingerprint("let x = 1\n"), fingerprint("let x = 1\n"));
    }

    #[test]
    fn trailing_newline_variants_differ() {
        assert_ne!(fingerprint("let x = 1"), fingerprint("let x = 1\n"));
    }

    #[test]
    fn trailing_semicolon_variants_differ() {
        assert_ne!(fingerprint("let x = 1;"), fingerprint("let x = 1\n"));
        assert_ne!(fingerprint("let x = 1;"), fingerprint("let x = 1"));
    }

    #[test]
    fn import_order_variants_differ() {
        assert_ne!(
            fingerprint("import A\nimport B\n"),
            fingerprint("import B\nimport A\n")
        );
    }

    #[test]
    fn options_affect_the_fingerprint() {
        let source = "let x = 1\n";
        let defaults = FormatOptions::default();
        let two_space = FormatOptions { indent: "  ".to_string(), ..Default::default() };
        let headered = FormatOptions {
            file_header: FileHeader::Text("// h".to_string()),
            ..Default::default()
        };
        assert_ne!(
            cache_fingerprint(source, &defaults),
            cache_fingerprint(source, &two_space)
        );
        assert_ne!(
            cache_fingerprint(source, &defaults),
            cache_fingerprint(source, &headered)
        );
    }

    #[test]
    fn extra_options_hash_order_independently() {
        let mut first = FormatOptions::default();
        first.extra.insert("a".to_string(), "1".to_string());
        first.extra.insert("b".to_string(), "2".to_string());
        let mut second = FormatOptions::default();
        second.extra.insert("b".to_string(), "2".to_string());
        second.extra.insert("a".to_string(), "1".to_string());
        assert_eq!(
            cache_fingerprint("x", &first),
            cache_fingerprint("x", &second)
        );
    }
}
