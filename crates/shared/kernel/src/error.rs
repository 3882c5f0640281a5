use std::borrow::Cow;

/// Errors raised by the resolution kernel.
///
/// Unresolvable type tokens are deliberately absent: resolution reports them as
/// `None` because callers look up optimistically.
#[xrkit_derive::xrkit_error]
pub enum KernelError {
    /// An assigned type fails its kind, interface or abstractness constraint.
    #[error("Type constraint violation{}: {message}", format_context(.context))]
    TypeConstraintViolation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Two distinct types claim the same identity, or one type claims two.
    #[error("Duplicate type identity{}: {message}", format_context(.context))]
    DuplicateType { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A declared identity token is not a valid GUID.
    #[error("Invalid type identity{}: {message}", format_context(.context))]
    InvalidIdentity { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A platform name is not known to the catalog.
    #[error("Unknown platform{}: {message}", format_context(.context))]
    UnknownPlatform { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Neither the leaf nor the parent configuration supplies a required field.
    #[error("Missing required configuration{}: {message}", format_context(.context))]
    MissingRequiredConfiguration {
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal kernel error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
