//! Serde round trips. Deserialization re-verifies.

use pretty_assertions::assert_eq;
use tessera_constrained::prelude::*;

type Percent = ConstrainedValue<u8, ClosedInterval<Const<0>, Const<100>>, RejectingVerifier>;
type Level = ClampedValue<i32, Const<0>, Const<10>>;

#[test]
fn serializes_as_inner_value() {
    let p = Percent::try_new(42).unwrap();
    assert_eq!(serde_json::to_string(&p).unwrap(), "42");
}

#[test]
fn deserialize_accepts_valid_input() {
    let p: Percent = serde_json::from_str("100").unwrap();
    assert_eq!(*p, 100);
}

#[test]
fn deserialize_rejects_invalid_input() {
    let err = serde_json::from_str::<Percent>("101").unwrap_err();
    assert!(err.to_string().contains("value violates constraint `bounded`"));
}

#[test]
fn deserialize_clamps_for_clamping_verifier() {
    let level: Level = serde_json::from_str("-3").unwrap();
    assert_eq!(*level, 0);
}

#[test]
fn asserting_verifier_rejects_instead_of_aborting() {
    type Checked = BoundedValue<i32, Const<1>, Const<5>>;
    assert!(serde_json::from_str::<Checked>("9").is_err());
}

#[test]
fn tagged_round_trip() {
    enum UserId {}
    let id: Tagged<u64, UserId> = Tagged::new(7);
    let json = serde_json::to_string(&id).unwrap();
    let back: Tagged<u64, UserId> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}
