//! Cache key generation from the query identity.

use sha2::{Digest, Sha256};

use crate::query::QueryIdentity;

/// Compute the cache key for a query identity.
///
/// The identity serializes with a fixed field order, so equal identities
/// always produce the same key.
pub fn compute_cache_key(identity: &QueryIdentity) -> String {
    let canonical = serde_json::to_string(identity).unwrap_or_default();

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{FormStatus, SortOrder};

    #[test]
    fn test_hash_stability() {
        let hash1 = compute_cache_key(&QueryIdentity::new("form-1"));
        let hash2 = compute_cache_key(&QueryIdentity::new("form-1"));
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn test_hash_different_form() {
        assert_ne!(compute_cache_key(&QueryIdentity::new("a")), compute_cache_key(&QueryIdentity::new("b")));
    }

    #[test]
    fn test_hash_different_status() {
        let finished = QueryIdentity { status: Some(FormStatus::Finished), ..QueryIdentity::new("f") };
        let in_progress = QueryIdentity { status: Some(FormStatus::InProgress), ..QueryIdentity::new("f") };
        assert_ne!(compute_cache_key(&finished), compute_cache_key(&in_progress));
    }

    #[test]
    fn test_hash_unset_differs_from_set() {
        let unsorted = QueryIdentity::new("f");
        let sorted = QueryIdentity { sort: Some(SortOrder::Asc), ..QueryIdentity::new("f") };
        assert_ne!(compute_cache_key(&unsorted), compute_cache_key(&sorted));
    }

    #[test]
    fn test_hash_format() {
        let hash = compute_cache_key(&QueryIdentity::new("f"));
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
