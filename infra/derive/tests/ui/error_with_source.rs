use std::borrow::Cow;
use xrkit_derive::xrkit_error;

#[xrkit_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: DemoError = std::io::Error::other("disk").into();
    assert!(matches!(err, DemoError::Io { context: None, .. }));

    let err: DemoError = "boom".into();
    assert_eq!(err.to_string(), "Internal error: boom");
}
