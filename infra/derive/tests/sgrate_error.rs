use std::borrow::Cow;

#[sgrate_derive::sgrate_error]
pub enum DemoError {
    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Bad value{}: {message}", format_context(.context))]
    BadValue { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read_missing() -> Result<String, std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
}

#[test]
fn source_result_gets_context_attached() {
    let err = read_missing().context("Loading fixture").unwrap_err();
    match &err {
        DemoError::Io { context, .. } => assert_eq!(context.as_deref(), Some("Loading fixture")),
        other => panic!("unexpected variant: {other}"),
    }
    assert_eq!(err.to_string(), "I/O error (Loading fixture): gone");
}

#[test]
fn context_on_own_result_fills_empty_slot() {
    let bare: Result<(), DemoError> =
        Err(DemoError::BadValue { message: "weight".into(), context: None });
    let err = bare.context("Row 3").unwrap_err();
    assert_eq!(err.to_string(), "Bad value (Row 3): weight");
}

#[test]
fn from_source_without_context() {
    let err: DemoError = read_missing().unwrap_err().into();
    assert!(matches!(err, DemoError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "I/O error: gone");
}

#[test]
fn strings_convert_into_internal() {
    let err: DemoError = "boom".into();
    assert!(matches!(err, DemoError::Internal { .. }));
    let err: DemoError = String::from("boom").into();
    assert_eq!(err.to_string(), "Internal error: boom");
}

#[test]
fn source_chain_is_preserved() {
    let err = read_missing().context("Loading fixture").unwrap_err();
    let source = std::error::Error::source(&err).expect("source retained");
    assert_eq!(source.to_string(), "gone");
}

#[test]
fn ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/sgrate_error_pass.rs");
}
