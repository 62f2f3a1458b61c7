//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. Canonical domain set has expected count (catches forgotten additions to ALL)
//! 2. All domain byte strings are unique (prevents domain collision)
//! 3. All domains are null-terminated and follow `GRIDSEARCH::*::V1\0`
//! 4. `canonical_hash` is plain SHA-256 over prefix + payload
//! 5. No raw `GRIDSEARCH::` domain literals in production source outside `hash.rs`

use std::collections::BTreeSet;

use gridsearch_kernel::proof::hash::{canonical_hash, HashDomain};
use sha2::{Digest, Sha256};

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        3,
        "expected 3 domain variants; if you added a new domain, update this count"
    );
}

#[test]
fn hash_domain_all_unique_bytes() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(
            seen.insert(domain.as_bytes()),
            "duplicate domain bytes: {domain}"
        );
    }
}

#[test]
fn hash_domain_all_follow_naming_convention() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(
            bytes.starts_with(b"GRIDSEARCH::"),
            "{domain} does not start with GRIDSEARCH::"
        );
        assert!(
            bytes.ends_with(b"::V1\0"),
            "{domain} does not end with ::V1\\0"
        );
        assert_eq!(
            bytes.iter().filter(|&&b| b == 0).count(),
            1,
            "{domain} has an interior null"
        );
    }
}

#[test]
fn canonical_hash_matches_independent_sha256() {
    let payload = br#"{"a":1}"#;
    for domain in HashDomain::ALL {
        let mut hasher = Sha256::new();
        hasher.update(domain.as_bytes());
        hasher.update(payload);
        let expected = format!("sha256:{}", hex::encode(hasher.finalize()));
        assert_eq!(canonical_hash(*domain, payload).as_str(), expected, "{domain}");
    }
}

/// Scan kernel/, search/, harness/ source for `b"GRIDSEARCH::` literals.
/// The only file allowed to contain them is `hash.rs`.
#[test]
fn no_raw_domain_literals_outside_authority() {
    let production_dirs = [
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../kernel/src"),
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../search/src"),
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../harness/src"),
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../cli/src"),
    ];

    let pattern = "b\"GRIDSEARCH::";
    let authority_file = "hash.rs";
    let mut violations = Vec::new();

    for dir in &production_dirs {
        for path in walkdir(std::path::Path::new(dir)) {
            if path.extension().and_then(|e| e.to_str()) != Some("rs") {
                continue;
            }
            if path.file_name().and_then(|n| n.to_str()) == Some(authority_file) {
                continue;
            }
            let Ok(content) = std::fs::read_to_string(&path) else {
                continue;
            };
            for (i, line) in content.lines().enumerate() {
                let trimmed = line.trim();
                if !trimmed.starts_with("//") && trimmed.contains(pattern) {
                    violations.push(format!("  {}:{}: {}", path.display(), i + 1, trimmed));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "raw GRIDSEARCH:: domain literals found outside {authority_file}:\n{}",
        violations.join("\n")
    );
}

/// Simple recursive directory walker (avoids adding walkdir dependency).
fn walkdir(dir: &std::path::Path) -> Vec<std::path::PathBuf> {
    let mut results = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                results.extend(walkdir(&path));
            } else {
                results.push(path);
            }
        }
    }
    results
}
