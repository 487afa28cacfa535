//! # Ignis Core Errors
//!
//! Defines the failure taxonomy of the component initializer.
//!
//! Registration and callback validation failures are synchronous and
//! caller-visible; lifecycle failures cover misuse of the single-use
//! instantiation pass and component startup errors. Every kind carries a
//! stable numeric code for hosts that file failures by category.
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

/// Boxed error carried by a failed component startup.
pub type StartupError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure raised by the initializer.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Registration record unusable as a whole.
    #[error("invalid component given: {reason}")]
    InvalidComponent { reason: String },

    /// Registration record missing its priority.
    #[error("invalid priority given for component '{name}'")]
    InvalidPriority { name: String },

    /// Registration record missing its factory.
    #[error("invalid component factory given for component '{name}'")]
    InvalidComponentFactory { name: String },

    /// Completion callback installed after the generation already completed.
    #[error("invalid callback given: all components already resolved")]
    InvalidCallback,

    /// `instantiate_components` called a second time.
    #[error("components already instantiated")]
    AlreadyInstantiated,

    /// A component factory or its deferred startup failed.
    #[error("component '{component}' failed to start: {source}")]
    StartupFailed {
        component: String,
        #[source]
        source: StartupError,
    },
}

impl Error {
    /// Stable numeric code for the failure category.
    ///
    /// Registration validation failures are 1xx, callback validation is 2xx,
    /// lifecycle failures are 3xx.
    pub fn code(&self) -> u32 {
        match self {
            Error::InvalidComponent { .. } => 100,
            Error::InvalidPriority { .. } => 101,
            Error::InvalidComponentFactory { .. } => 102,
            Error::InvalidCallback => 200,
            Error::AlreadyInstantiated => 300,
            Error::StartupFailed { .. } => 301,
        }
    }
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;
