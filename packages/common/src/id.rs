use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of every generated record identifier.
pub const ID_LENGTH: usize = 8;

/// Generate a random record identifier.
///
/// Characters are drawn uniformly, with replacement, from `[a-zA-Z0-9]`.
/// Nothing here guarantees uniqueness: the primary key constraint does, and
/// callers retry with a fresh identifier on collision.
pub fn generate_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LENGTH)
        .map(char::from)
        .collect()
}

/// Returns true if `id` has the shape produced by [`generate_id`].
pub fn is_valid_id(id: &str) -> bool {
    id.len() == ID_LENGTH && id.bytes().all(|b| b.is_ascii_alphanumeric())
}
