//! Command-line argument scanning
//!
//! `--skip` opens a group; every following token that does not look like a
//! flag joins the group as a skip candidate. Any other token is ignored so
//! that flags added later do not break older invocations. Candidates are
//! returned verbatim, duplicates included; validation happens in
//! [`crate::skip`].

/// Flag that opens a group of skip candidates
pub const SKIP_FLAG: &str = "--skip";

/// Tokens starting with this prefix are treated as flags
pub const FLAG_PREFIX: char = '-';

/// Collects skip candidates from a token sequence
///
/// `tokens` must not include the program name. Repeated `--skip` flags
/// concatenate their groups, and `--skip=NAME` opens a group whose first
/// candidate is `NAME`.
pub fn parse_skip_candidates<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut candidates = Vec::new();
    let mut collecting = false;

    for token in tokens {
        let token = token.as_ref();

        if token == SKIP_FLAG {
            collecting = true;
        } else if let Some(value) = token
            .strip_prefix(SKIP_FLAG)
            .and_then(|rest| rest.strip_prefix('='))
        {
            collecting = true;
            if !value.is_empty() {
                candidates.push(value.to_string());
            }
        } else if token.starts_with(FLAG_PREFIX) {
            collecting = false;
        } else if collecting {
            candidates.push(token.to_string());
        }
    }

    candidates
}
