//! Tests for Result/Option adapters, built-in identities and macros

use ex::{
    bail, critical, dummy, ensure, err, unexpected, unknown, ChainedError, Identity, OptionExt,
    ResultExt, CRITICAL, DUMMY, UNEXPECTED, UNKNOWN,
};

const ERR_VALIDATION: Identity = Identity::new("validation failed");

#[test]
fn test_builtin_wrappers_render_and_match() {
    let cases = [
        (
            unexpected(std::io::Error::other("connection refused")),
            UNEXPECTED,
            "unexpected: connection refused",
        ),
        (
            critical(std::io::Error::other("disk is full")),
            CRITICAL,
            "critical: disk is full",
        ),
        (
            unknown(std::io::Error::other("no idea")),
            UNKNOWN,
            "unknown: no idea",
        ),
        (
            dummy(std::io::Error::other("finite task")),
            DUMMY,
            "dummy: finite task",
        ),
    ];

    for (err, identity, text) in cases {
        assert_eq!(err.to_string(), text);
        assert!(err.is(&identity), "{text}");
    }
}

#[test]
fn test_result_ext_wraps_errors_only() {
    let failed: Result<u8, std::fmt::Error> = Err(std::fmt::Error);
    let wrapped = failed.unexpected();

    assert!(wrapped.as_ref().is_err_and(|err| err.is(&UNEXPECTED)));
    assert!(wrapped.is_err_and(|err| err.is(&std::fmt::Error)));

    let fine: Result<u8, std::fmt::Error> = Ok(7);
    assert_eq!(fine.unexpected().ok(), Some(7));
    assert_eq!(fine.critical().ok(), Some(7));
    assert_eq!(fine.unknown().ok(), Some(7));
    assert_eq!(fine.dummy().ok(), Some(7));
    assert_eq!(fine.chained().ok(), Some(7));
}

#[test]
fn test_result_ext_because_and_chained() {
    let failed: Result<(), ChainedError> = Err(ERR_VALIDATION.reason("email address is missing"));

    let rewrapped = failed.clone().because(&Identity::new("signup failed"));
    assert_eq!(
        rewrapped.err().map(|err| err.to_string()).as_deref(),
        Some("signup failed: validation failed: email address is missing")
    );

    let normalized = failed.chained();
    assert_eq!(
        normalized.err().map(|err| err.to_string()).as_deref(),
        Some("validation failed: email address is missing")
    );
}

#[test]
fn test_option_ext() {
    assert_eq!(Some(3).ok_or_identity(&ERR_VALIDATION).ok(), Some(3));

    let missing = None::<u8>.ok_or_identity(&ERR_VALIDATION);
    assert!(missing.is_err_and(|err| err.cause().is_none() && err.is(&ERR_VALIDATION)));

    let missing = None::<u8>.ok_or_reason(&ERR_VALIDATION, "email address is missing");
    assert_eq!(
        missing.err().map(|err| err.to_string()).as_deref(),
        Some("validation failed: email address is missing")
    );
}

#[test]
fn test_err_macro() {
    let leaf = err!(ERR_VALIDATION);
    assert!(leaf.cause().is_none());
    assert_eq!(leaf.to_string(), "validation failed");

    let literal = err!(ERR_VALIDATION, "email address is missing");
    assert_eq!(literal.to_string(), "validation failed: email address is missing");

    let field = "email";
    let formatted = err!(ERR_VALIDATION, "{} is missing", field);
    assert_eq!(formatted.to_string(), "validation failed: email is missing");
    assert!(formatted.is(&Identity::new("email is missing")));
}

fn validate(email: &str) -> ex::Result<&str> {
    ensure!(!email.is_empty(), ERR_VALIDATION, "email address is missing");
    ensure!(email.contains('@'), ERR_VALIDATION, "{email} has no domain");
    if email.len() > 64 {
        bail!(ERR_VALIDATION);
    }
    Ok(email)
}

#[test]
fn test_bail_and_ensure() {
    assert_eq!(validate("user@example.com").ok(), Some("user@example.com"));

    assert_eq!(
        validate("").err().map(|err| err.to_string()).as_deref(),
        Some("validation failed: email address is missing")
    );
    assert_eq!(
        validate("user").err().map(|err| err.to_string()).as_deref(),
        Some("validation failed: user has no domain")
    );

    let long = format!("{}@example.com", "a".repeat(64));
    assert!(validate(&long).is_err_and(|err| err.cause().is_none()));
}
