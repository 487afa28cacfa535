use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::result::Result as StdResult;

use crate::error::{Error, Result, StartupError};

// This type represents an owned future tracking a deferred component startup
pub type StartupFuture = Pin<Box<dyn Future<Output = StdResult<(), StartupError>> + Send + 'static>>;

/// Zero-argument factory constructing one component instance.
pub type ComponentFactory = Box<dyn FnOnce() -> StdResult<Startup, StartupError> + Send + 'static>;

/// Owned future returned by a completion callback.
pub type CompletionFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Callback invoked once every registered component has resolved.
pub type CompletionCallback = Box<dyn FnOnce() -> CompletionFuture + Send + 'static>;

/// Outcome of constructing a component.
///
/// Factories declare through this type whether the component is usable as
/// soon as the factory returns, or finishes starting up in the background.
pub enum Startup {
    /// The component is fully resolved on return.
    Ready,
    /// The component resolves once the contained future settles.
    Pending(StartupFuture),
}

impl Startup {
    /// Wrap a future as a deferred startup.
    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = StdResult<(), StartupError>> + Send + 'static,
    {
        Startup::Pending(Box::pin(future))
    }
}

impl fmt::Debug for Startup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Startup::Ready => write!(f, "Ready"),
            Startup::Pending(_) => write!(f, "Pending"),
        }
    }
}

/// Helper to adapt a synchronous closure into a completion callback
pub fn sync_callback<F>(f: F) -> CompletionCallback
where
    F: FnOnce() + Send + 'static,
{
    Box::new(move || {
        f();
        Box::pin(async {})
    })
}

/// Registration record for a single component.
///
/// Mirrors the loose record shape hosts hand to the initializer: fields are
/// assembled one by one and completeness is checked at registration time,
/// not at construction time.
pub struct ComponentSpec {
    name: String,
    priority: Option<i64>,
    factory: Option<ComponentFactory>,
}

impl ComponentSpec {
    /// Start a registration record for the named component.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: None,
            factory: None,
        }
    }

    /// Set the instantiation priority. Lower values instantiate earlier.
    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the component factory.
    pub fn factory<F>(mut self, factory: F) -> Self
    where
        F: FnOnce() -> StdResult<Startup, StartupError> + Send + 'static,
    {
        self.factory = Some(Box::new(factory));
        self
    }

    /// The component name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validate the record into a registry entry.
    ///
    /// Checks run in registration order: usable name, then priority, then
    /// factory. The first violation wins.
    pub(crate) fn into_entry(self) -> Result<ComponentEntry> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidComponent {
                reason: "component name is empty".to_string(),
            });
        }
        let priority = match self.priority {
            Some(priority) => priority,
            None => return Err(Error::InvalidPriority { name: self.name }),
        };
        let factory = match self.factory {
            Some(factory) => factory,
            None => return Err(Error::InvalidComponentFactory { name: self.name }),
        };
        Ok(ComponentEntry {
            name: self.name,
            priority,
            factory: Some(factory),
        })
    }
}

impl fmt::Debug for ComponentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentSpec")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("has_factory", &self.factory.is_some())
            .finish()
    }
}

/// A validated registration, owned exclusively by the initializer's registry.
pub struct ComponentEntry {
    name: String,
    priority: i64,
    factory: Option<ComponentFactory>,
}

impl ComponentEntry {
    /// The component name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The instantiation priority.
    pub fn priority(&self) -> i64 {
        self.priority
    }

    /// Consume the factory slot. Empty once the entry has been instantiated.
    pub(crate) fn take_factory(&mut self) -> Option<ComponentFactory> {
        self.factory.take()
    }
}

impl fmt::Debug for ComponentEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentEntry")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("instantiated", &self.factory.is_none())
            .finish()
    }
}
