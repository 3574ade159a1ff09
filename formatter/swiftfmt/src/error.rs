//! Caller-facing error taxonomy.

/// Everything a format call can fail with.
///
/// The tokenizer itself is total; `Parsing` originates in the post-tokenize
/// diagnostic pass, `Writing` in the rule engine (non-termination, per-rule
/// timeouts), `Options` in configuration validation, and `Reading` is
/// reserved for the file-enumeration front end, which passes its I/O
/// failures through this type unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("unable to read input: {0}")]
    Reading(String),
    #[error("unable to write output: {0}")]
    Writing(String),
    #[error("unable to parse input: {0}")]
    Parsing(String),
    #[error("invalid option: {0}")]
    Options(String),
}

#[cfg(test)]
mod tests {
    use super::FormatError;

    #[test]
    fn messages_carry_their_kind() {
        assert_eq!(
            FormatError::Parsing("unexpected token `@` at 1:0".into()).to_string(),
            "unable to parse input: unexpected token `@` at 1:0"
        );
        assert_eq!(
            FormatError::Writing("rule x timed out".into()).to_string(),
            "unable to write output: rule x timed out"
        );
        assert_eq!(
            FormatError::Options("tab width must be at least 1".into()).to_string(),
            "invalid option: tab width must be at least 1"
        );
        assert_eq!(
            FormatError::Reading("no such file".into()).to_string(),
            "unable to read input: no such file"
        );
    }
}
