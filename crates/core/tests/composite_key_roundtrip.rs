//! Round-trip law for the composite-key wire format (`SPEC_FULL.md` §8).

use dataflow_core::{CompositeKey, DatumId, Subscript};

#[test]
fn round_trip_recovers_original_pair() {
    let pairs: &[(i64, &[u8])] = &[
        (1, b""),
        (-1, b"x"),
        (1_000_000, b"deeply/nested/path"),
        (i64::MAX, &[0xff; 64]),
        (i64::MIN, b"a"),
    ];

    for &(id, sub) in pairs {
        let id = DatumId::new(id);
        let subscript = Subscript::from(sub);
        let key = CompositeKey::new(id, &subscript);
        let (decoded_id, decoded_sub) = key.decode().expect("valid composite key decodes");
        assert_eq!(decoded_id, id);
        assert_eq!(decoded_sub, subscript);
    }
}

#[test]
fn distinct_pairs_never_collide() {
    let samples: Vec<(i64, Vec<u8>)> = (0..50)
        .map(|i| (i * 7 - 25, format!("sub-{i}").into_bytes()))
        .collect();

    let keys: Vec<CompositeKey> = samples
        .iter()
        .map(|(id, sub)| CompositeKey::new(DatumId::new(*id), &Subscript::from(sub.clone())))
        .collect();

    for i in 0..keys.len() {
        for j in (i + 1)..keys.len() {
            assert_ne!(keys[i], keys[j], "keys for distinct pairs must differ");
        }
    }
}

#[test]
fn whole_datum_and_empty_subscript_are_distinct_pairs() {
    // The engine itself represents "no subscript" as `Option::None` rather
    // than encoding it, but an empty explicit subscript still must not
    // collide with other encodings for the same id.
    let empty_sub_key = CompositeKey::new(DatumId::new(5), &Subscript::empty());
    let nonempty_sub_key = CompositeKey::new(DatumId::new(5), &Subscript::from("x"));
    assert_ne!(empty_sub_key, nonempty_sub_key);
}
