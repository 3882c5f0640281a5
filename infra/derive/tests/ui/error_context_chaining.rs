use std::borrow::Cow;
use xrkit_derive::xrkit_error;

#[xrkit_error]
pub enum DemoError {
    #[error("Missing field{}: {message}", format_context(.context))]
    Missing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

fn missing() -> Result<(), DemoError> {
    Err(DemoError::Missing { message: "poses".into(), context: None })
}

fn read() -> Result<(), DemoError> {
    Err(std::io::Error::other("disk")).context("Reading profile")
}

fn main() {
    let err = missing().context("hand tracking").unwrap_err();
    assert_eq!(err.to_string(), "Missing field (hand tracking): poses");

    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (Reading profile): disk");
}
