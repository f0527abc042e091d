use super::*;

#[test]
fn test_validate_helpers() {
    assert!(validate::parameter(true, "ctx", "fine").is_ok());
    assert!(matches!(
        validate::parameter(false, "ctx", "bad"),
        Err(Error::InvalidParameter { context: "ctx", .. })
    ));
    assert!(matches!(
        validate::private_key(false, "key", "zero"),
        Err(Error::InvalidPrivateKey { context: "key", .. })
    ));
    assert_eq!(
        validate::length("HMAC output", 31, 32),
        Err(Error::InvalidLength {
            context: "HMAC output",
            expected: 32,
            actual: 31,
        })
    );
}

#[test]
fn test_context_accessor() {
    let err = Error::MissingPrimitive { primitive: "HMAC" };
    assert_eq!(err.context(), "HMAC");

    let err = Error::ExhaustedRetries {
        context: "RFC6979",
        attempts: 1000,
    };
    assert_eq!(err.context(), "RFC6979");
}

#[cfg(feature = "std")]
#[test]
fn test_display() {
    let err = Error::ExhaustedRetries {
        context: "RFC6979 generate",
        attempts: 1000,
    };
    assert_eq!(
        err.to_string(),
        "RFC6979 generate: tried 1000 candidates, all were invalid"
    );

    let err = Error::invalid_key("PrivateKey", "scalar is zero");
    assert_eq!(err.to_string(), "Invalid private key: PrivateKey: scalar is zero");

    let err = Error::MissingPrimitive { primitive: "HMAC" };
    assert_eq!(err.to_string(), "Missing primitive: HMAC is not available");
}
