//! Random session ids and bearer tokens.

use rand::Rng;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of a session id.
pub const SESSION_ID_LEN: usize = 8;

/// Token layout: `<2 chars>-<24 chars>`.
const TOKEN_HEAD_LEN: usize = 2;
const TOKEN_TAIL_LEN: usize = 24;

/// Total length of a bearer token.
pub const TOKEN_LEN: usize = TOKEN_HEAD_LEN + 1 + TOKEN_TAIL_LEN;

/// Scheme prefix a credential must carry.
pub const BEARER_PREFIX: &str = "Bearer ";

/// `len` characters drawn from `[a-z0-9]`.
pub fn random_id<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

pub fn random_token<R: Rng>(rng: &mut R) -> String {
    format!(
        "{}-{}",
        random_id(rng, TOKEN_HEAD_LEN),
        random_id(rng, TOKEN_TAIL_LEN)
    )
}

/// The token part of a `Bearer <token>` credential.
pub fn strip_bearer(credential: &str) -> Option<&str> {
    credential.strip_prefix(BEARER_PREFIX)
}
