//! # Ignis Core
//!
//! Core library of the `ignis` component lifecycle initializer.
//!
//! Hosts register named components — an integer priority plus a
//! zero-argument factory — and an [`Initializer`](bootstrap::Initializer)
//! instantiates them in ascending priority order. Factories declare through
//! the [`Startup`](component::Startup) type whether their component resolved
//! synchronously or keeps starting up in the background; once every
//! registered component has resolved, the caller-supplied completion
//! callback fires exactly once.
//!
//! ## Key Responsibilities & Components:
//!
//! - **Bootstrap**: the [`Initializer`](bootstrap::Initializer) lifecycle
//!   driver in the `bootstrap` submodule.
//! - **Registration**: [`ComponentSpec`](component::ComponentSpec),
//!   [`Startup`](component::Startup) and the callback aliases in the
//!   `component` submodule.
//! - **Ordering**: the priority-sorted
//!   [`ComponentRegistry`](registry::ComponentRegistry) in the `registry`
//!   submodule.
//! - **Error Handling**: typed failures ([`Error`](error::Error)) with
//!   stable numeric codes and a `Result` alias in the `error` submodule.
//! - **Reporting**: the injectable [`ErrorReporter`](reporter::ErrorReporter)
//!   collaborator in the `reporter` submodule.
pub mod bootstrap;
pub mod component;
pub mod error;
pub mod registry;
pub mod reporter;

// Re-export key public types for easier use by the binary and hosts
pub use bootstrap::Initializer;
pub use component::{sync_callback, CompletionCallback, ComponentEntry, ComponentSpec, Startup};
pub use error::{Error, Result, StartupError};
pub use registry::ComponentRegistry;
pub use reporter::{ErrorReporter, LogReporter};

// Test module declaration
#[cfg(test)]
mod tests;
