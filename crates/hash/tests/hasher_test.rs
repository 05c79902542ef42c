use convoy_hash::{ContentHasher, HashError, hash_content};
use std::collections::BTreeMap;

hash_content!(
    struct ContentOne<'l> {
        pub one: &'l str,
    }
);

hash_content!(
    struct ContentTwo {
        pub two: usize,
    }
);

hash_content!(
    struct Unordered {
        pub beta: BTreeMap<&'static str, Option<bool>>,
        pub alpha: usize,
    }
);

hash_content!(
    struct Unencodable {
        pub pairs: BTreeMap<(u8, u8), &'static str>,
    }
);

#[test]
fn hashes_empty() {
    let mut hasher = ContentHasher::new("test");

    assert_eq!(
        hasher.generate_hash(),
        "4f53cda18c2baa0c0354bb5f9a3ecbe5ed12ab4d8e11ba873c2f11161202b945"
    );
}

#[test]
fn hashes_with_1_content() {
    let mut hasher = ContentHasher::new("test");
    hasher.hash_content(ContentOne { one: "abc" }).unwrap();

    assert_eq!(
        hasher.generate_hash(),
        "37d04b9909c26008c08eeed62baf021fbd439a748c8a4b0aa27e66fe17c4dcb8"
    );

    let mut hasher = ContentHasher::new("test");
    hasher.hash_content(ContentOne { one: "xyz" }).unwrap();

    assert_eq!(
        hasher.generate_hash(),
        "deec63985262a5c34ea2352e368aa96623193584ec1055817dcaaea1eb746c30"
    );
}

#[test]
fn hashes_with_2_content() {
    let mut hasher = ContentHasher::new("test");
    hasher.hash_content(ContentOne { one: "abc" }).unwrap();
    hasher.hash_content(ContentTwo { two: 123 }).unwrap();

    assert_eq!(
        hasher.generate_hash(),
        "c65c4706a49bfa57a44b25bf5b441ec6549358c1a87a91a2aa8502fe225ac5f6"
    );
}

#[test]
fn label_does_not_affect_hash() {
    let mut a = ContentHasher::new("a");
    a.hash_content(ContentOne { one: "abc" }).unwrap();

    let mut b = ContentHasher::new("b");
    b.hash_content(ContentOne { one: "abc" }).unwrap();

    assert_eq!(a.generate_hash(), b.generate_hash());
}

#[test]
fn content_order_affects_hash() {
    let mut a = ContentHasher::new("test");
    a.hash_content(ContentOne { one: "abc" }).unwrap();
    a.hash_content(ContentTwo { two: 123 }).unwrap();

    let mut b = ContentHasher::new("test");
    b.hash_content(ContentTwo { two: 123 }).unwrap();
    b.hash_content(ContentOne { one: "abc" }).unwrap();

    assert_ne!(a.generate_hash(), b.generate_hash());
}

#[test]
fn invalidates_cache_when_content_added() {
    let mut hasher = ContentHasher::new("test");
    hasher.hash_content(ContentOne { one: "abc" }).unwrap();

    let first = hasher.generate_hash();

    assert_eq!(hasher.generate_hash(), first);

    hasher.hash_content(ContentTwo { two: 123 }).unwrap();

    assert_eq!(
        hasher.generate_hash(),
        "c65c4706a49bfa57a44b25bf5b441ec6549358c1a87a91a2aa8502fe225ac5f6"
    );
}

#[test]
fn serializes_with_sorted_keys() {
    let mut hasher = ContentHasher::new("test");
    hasher
        .hash_content(Unordered {
            beta: BTreeMap::from_iter([("y", None), ("x", Some(true))]),
            alpha: 1,
        })
        .unwrap();

    assert_eq!(
        hasher.serialize(),
        r#"[{"alpha":1,"beta":{"x":true,"y":null}}]"#
    );
    assert_eq!(
        hasher.generate_hash(),
        "13acfe2304ffccc9f1a565cad1e05fee8735fef9008cf73ba0dd01b6588d7aca"
    );
}

#[test]
fn errors_for_unencodable_content() {
    let mut hasher = ContentHasher::new("broken");
    let error = hasher
        .hash_content(Unencodable {
            pairs: BTreeMap::from_iter([((1, 2), "a")]),
        })
        .unwrap_err();

    let HashError::Serialization { label, .. } = error;

    assert_eq!(label, "broken");

    // Failed content is not recorded
    assert_eq!(hasher.serialize(), "[]");
}
