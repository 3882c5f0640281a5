use std::borrow::Cow;
use xrkit_input::InputError;
use xrkit_kernel::KernelError;
#[cfg(not(target_arch = "wasm32"))]
use xrkit_kernel::config::ConfigError;
use xrkit_services::ServicesError;
use xrkit_store::StoreError;

/// A specialized [`XrkitError`] enum of this crate.
#[xrkit_derive::xrkit_error]
pub enum XrkitError {
    #[error("Kernel error{}: {source}", format_context(.context))]
    Kernel { source: KernelError, context: Option<Cow<'static, str>> },

    #[error("Services error{}: {source}", format_context(.context))]
    Services { source: ServicesError, context: Option<Cow<'static, str>> },

    #[error("Input error{}: {source}", format_context(.context))]
    Input { source: InputError, context: Option<Cow<'static, str>> },

    #[error("Store error{}: {source}", format_context(.context))]
    Store { source: StoreError, context: Option<Cow<'static, str>> },

    #[cfg(not(target_arch = "wasm32"))]
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    /// A service failed a lifecycle step.
    #[error("Service lifecycle error{}: {message}", format_context(.context))]
    Lifecycle { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
