//! The façade prelude combines constrained values and variants.

use pretty_assertions::assert_eq;
use tessera::prelude::*;

type Port = ConstrainedValue<u16, GreaterEqual<Const<1024>>, RejectingVerifier>;

#[test]
fn constrained_values_inside_variants() {
    let mut setting = NullableVariant::<(Port, String)>::empty();

    let result = setting.try_emplace_with(|| Port::try_new(80));
    assert!(result.is_err());
    assert!(setting.is_empty());

    setting.try_emplace_with(|| Port::try_new(8080)).unwrap();
    assert_eq!(**setting.value::<Port, _>(), 8080);
}

#[test]
fn optional_of_clamped_value() {
    let level = Optional::some(make_clamped(12, 0, 10));
    assert_eq!(level.map(|v| v.into_inner()).value_or(0), 10);
}

#[test]
fn precheck_mode_is_reported() {
    let mode = PrecheckMode::current();
    assert_eq!(mode.is_checked(), tessera::precheck::DEBUG_CHECKS_ENABLED);
    check(true, "unreachable");
}
