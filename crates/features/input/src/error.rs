use std::borrow::Cow;
use xrkit_kernel::KernelError;

/// A specialized [`InputError`] enum of this crate.
#[xrkit_derive::xrkit_error]
pub enum InputError {
    /// Two binding lists of different lengths were asked to synchronize.
    #[error("Configuration length mismatch{}: {message}", format_context(.context))]
    ConfigurationLengthMismatch { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// A mapping index is past the end of the profile.
    #[error("Index out of bounds{}: {message}", format_context(.context))]
    IndexOutOfBounds { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("Kernel error{}: {source}", format_context(.context))]
    Kernel { source: KernelError, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal input error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
