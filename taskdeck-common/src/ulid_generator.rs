//! Monotonic ULID generation
//!
//! All entity identifiers in the workspace are ULIDs. A single process-wide
//! generator keeps ids created within the same millisecond strictly
//! increasing, so sorting by id is always sorting by creation time.

use std::sync::{LazyLock, Mutex};
use ulid::{Generator, Ulid};

static GENERATOR: LazyLock<Mutex<Generator>> = LazyLock::new(|| Mutex::new(Generator::new()));

/// Generate a new monotonic ULID.
///
/// Falls back to a fresh random ULID in the (practically unreachable) case
/// where the generator's random component overflows within one millisecond.
pub fn generate_monotonic_ulid() -> Ulid {
    let mut generator = GENERATOR.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    generator.generate().unwrap_or_else(|_| Ulid::new())
}

/// Generate a new monotonic ULID as its canonical 26-character string.
pub fn generate_monotonic_ulid_string() -> String {
    generate_monotonic_ulid().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ulids_are_unique() {
        let a = generate_monotonic_ulid();
        let b = generate_monotonic_ulid();
        assert_ne!(a, b);
    }

    #[test]
    fn generated_ulids_are_ordered() {
        let ids: Vec<Ulid> = (0..100).map(|_| generate_monotonic_ulid()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn string_form_is_canonical_length() {
        assert_eq!(generate_monotonic_ulid_string().len(), 26);
    }
}
