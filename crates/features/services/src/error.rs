use std::borrow::Cow;
use xrkit_kernel::KernelError;

/// A specialized [`ServicesError`] enum of this crate.
#[xrkit_derive::xrkit_error]
pub enum ServicesError {
    /// An edit addressed an entry past the end of the profile.
    #[error("Index out of bounds{}: {message}", format_context(.context))]
    IndexOutOfBounds { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Identity or platform resolution failed while hydrating a record.
    #[error("Kernel error{}: {source}", format_context(.context))]
    Kernel { source: KernelError, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal services error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
