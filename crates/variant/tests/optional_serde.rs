//! `Optional` serializes like `Option`.

use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use tessera_variant::Optional;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Endpoint {
    host: String,
    port: Optional<u16>,
}

#[test]
fn serializes_like_option() {
    assert_eq!(serde_json::to_string(&Optional::some(5)).unwrap(), "5");
    assert_eq!(serde_json::to_string(&Optional::<u8>::none()).unwrap(), "null");
}

#[test]
fn deserializes_like_option() {
    let some: Optional<String> = serde_json::from_str(r#""x""#).unwrap();
    let none: Optional<String> = serde_json::from_str("null").unwrap();
    assert_eq!(some, Optional::some("x".to_owned()));
    assert_eq!(none, Optional::none());
}

#[test]
fn struct_field_round_trip() {
    let endpoint = Endpoint {
        host: "localhost".into(),
        port: Optional::some(8080),
    };
    let json = serde_json::to_string(&endpoint).unwrap();
    insta::assert_snapshot!(json, @r#"{"host":"localhost","port":8080}"#);

    let back: Endpoint = serde_json::from_str(&json).unwrap();
    assert_eq!(back, endpoint);
}

#[test]
fn type_errors_propagate() {
    assert!(serde_json::from_str::<Optional<u16>>("\"not a port\"").is_err());
    assert!(serde_json::from_str::<Optional<u8>>("300").is_err());
}
