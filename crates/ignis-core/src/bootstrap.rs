use std::fmt;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::component::{CompletionCallback, ComponentSpec, Startup};
use crate::error::{Error, Result, StartupError};
use crate::registry::ComponentRegistry;
use crate::reporter::{ErrorReporter, LogReporter};

/// Component lifecycle initializer.
///
/// Components are registered with a priority and instantiated in ascending
/// priority order by a single [`instantiate_components`](Self::instantiate_components)
/// pass. Synchronous components resolve inline, before the next entry is
/// touched; deferred components resolve when their startup future settles on
/// the runtime. Once every registered component has resolved, the
/// caller-supplied completion callback fires exactly once.
pub struct Initializer {
    state: Arc<Mutex<InitializerState>>,
    reporter: Arc<dyn ErrorReporter>,
}

/// Mutable state shared with spawned startup continuations.
struct InitializerState {
    registry: ComponentRegistry,
    resolved: usize,
    failed: usize,
    callback: Option<CompletionCallback>,
    instantiated: bool,
}

impl Initializer {
    /// Create an initializer reporting failures through the log facade.
    pub fn new() -> Self {
        Self::with_reporter(Arc::new(LogReporter))
    }

    /// Create an initializer with an injected failure reporter.
    pub fn with_reporter(reporter: Arc<dyn ErrorReporter>) -> Self {
        Self {
            state: Arc::new(Mutex::new(InitializerState {
                registry: ComponentRegistry::new(),
                resolved: 0,
                failed: 0,
                callback: None,
                instantiated: false,
            })),
            reporter,
        }
    }

    /// Register a component for the instantiation pass.
    ///
    /// The record is validated (name, then priority, then factory) and the
    /// registry re-sorted ascending by priority. Registration stays legal
    /// after instantiation has begun; late entries raise the completion
    /// denominator but are not instantiated by the running generation.
    pub async fn register_component(&self, spec: ComponentSpec) -> Result<()> {
        let entry = match spec.into_entry() {
            Ok(entry) => entry,
            Err(err) => return Err(self.reject(err)),
        };
        let mut state = self.state.lock().await;
        log::debug!(
            "Registering component: {} (priority {})",
            entry.name(),
            entry.priority()
        );
        state.registry.insert(entry);
        Ok(())
    }

    /// Install the completion callback. The last callback set wins.
    ///
    /// Fails once the generation has completed, since the callback could
    /// never fire.
    pub async fn set_callback(&self, callback: CompletionCallback) -> Result<()> {
        let mut state = self.state.lock().await;
        if state.instantiated && state.resolved == state.registry.count() {
            return Err(self.reject(Error::InvalidCallback));
        }
        state.callback = Some(callback);
        Ok(())
    }

    /// Instantiate every registered component in priority order.
    ///
    /// Single-use. A factory error aborts the pass and propagates to the
    /// caller; deferred startups keep resolving in the background after this
    /// returns.
    pub async fn instantiate_components(&self) -> Result<()> {
        let planned = {
            let mut state = self.state.lock().await;
            if state.instantiated {
                return Err(self.reject(Error::AlreadyInstantiated));
            }
            state.instantiated = true;
            state.registry.take_pending_factories()
        };

        for (name, factory) in planned {
            log::debug!("Initializing component: {}", name);
            match factory() {
                Ok(Startup::Ready) => Self::mark_resolved(&self.state, &name).await,
                Ok(Startup::Pending(future)) => {
                    let state = Arc::clone(&self.state);
                    let reporter = Arc::clone(&self.reporter);
                    tokio::spawn(async move {
                        match future.await {
                            Ok(()) => Self::mark_resolved(&state, &name).await,
                            Err(source) => {
                                Self::mark_failed(&state, &reporter, name, source).await
                            }
                        }
                    });
                }
                Err(source) => {
                    return Err(self.reject(Error::StartupFailed {
                        component: name,
                        source,
                    }));
                }
            }
        }

        // An empty pass produces no resolution event to reach the completion
        // check, so evaluate it once here.
        let callback = {
            let mut state = self.state.lock().await;
            if state.resolved == state.registry.count() {
                state.callback.take()
            } else {
                None
            }
        };
        if let Some(callback) = callback {
            log::debug!("All components resolved, invoking completion callback");
            callback().await;
        }
        Ok(())
    }

    /// Number of registered components.
    pub async fn component_count(&self) -> usize {
        self.state.lock().await.registry.count()
    }

    /// Component names in instantiation order.
    pub async fn component_names(&self) -> Vec<String> {
        self.state.lock().await.registry.names_in_order()
    }

    /// Number of components that have resolved so far.
    pub async fn resolved_count(&self) -> usize {
        self.state.lock().await.resolved
    }

    /// Number of deferred components whose startup failed.
    pub async fn failed_count(&self) -> usize {
        self.state.lock().await.failed
    }

    /// Whether the instantiation pass has started.
    pub async fn is_instantiated(&self) -> bool {
        self.state.lock().await.instantiated
    }

    /// Whether every registered component has resolved.
    pub async fn is_complete(&self) -> bool {
        let state = self.state.lock().await;
        state.instantiated && state.resolved == state.registry.count()
    }

    /// Resolution event: one component finished starting.
    ///
    /// Fires the completion callback when the resolved count reaches the
    /// registered count evaluated at this moment, so components registered
    /// mid-flight keep the callback waiting.
    async fn mark_resolved(state: &Arc<Mutex<InitializerState>>, name: &str) {
        let callback = {
            let mut state = state.lock().await;
            state.resolved += 1;
            log::debug!(
                "Component resolved: {} ({}/{})",
                name,
                state.resolved,
                state.registry.count()
            );
            if state.resolved == state.registry.count() {
                state.callback.take()
            } else {
                None
            }
        };
        // run user code outside the state lock
        if let Some(callback) = callback {
            log::debug!("All components resolved, invoking completion callback");
            callback().await;
        }
    }

    /// Failure event: a deferred startup settled with an error.
    ///
    /// The component never counts as resolved, so the generation cannot
    /// complete; the failure is reported instead of dropped.
    async fn mark_failed(
        state: &Arc<Mutex<InitializerState>>,
        reporter: &Arc<dyn ErrorReporter>,
        name: String,
        source: StartupError,
    ) {
        reporter.report(&Error::StartupFailed {
            component: name,
            source,
        });
        let mut state = state.lock().await;
        state.failed += 1;
    }

    /// Report a failure and hand it back for propagation.
    fn reject(&self, err: Error) -> Error {
        self.reporter.report(&err);
        err
    }
}

impl Default for Initializer {
    fn default() -> Self {
        Self::new()
    }
}

// Manual Debug impl, the callback and factories are not Debug
impl fmt::Debug for Initializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Initializer").finish_non_exhaustive()
    }
}
