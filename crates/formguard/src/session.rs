//! Validation sessions: one live error slot per form field

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::debounce::{Debouncer, Ticket};
use crate::options::{FieldOptions, NoOptions, Resolved, ValidationOptions};
use crate::signal::Dynamic;

type ValidatorFn<V, R> = dyn Fn(&V, &Resolved<R>) -> Option<String> + Send + Sync;

/// Required-field short-circuit for blank values
///
/// Field validators call this first when the input is blank: an optional
/// field is valid, a required one reports `message`.
pub fn required_error<R>(options: &Resolved<R>, message: &str) -> Option<String> {
    options.is_required.then(|| message.to_string())
}

/// Live validation state for one field
///
/// Holds the current `error` and the two triggers. Cloning yields another
/// handle to the same session; the pending debounced run is aborted once the
/// last handle is dropped.
pub struct ValidationSession<V, O: FieldOptions = NoOptions> {
    inner: Arc<Inner<V, O>>,
}

struct Inner<V, O: FieldOptions> {
    input: Dynamic<V>,
    options: ValidationOptions<O>,
    validator: Box<ValidatorFn<V, O::Resolved>>,
    error: watch::Sender<Option<String>>,
    debouncer: Mutex<Debouncer>,
    runtime: Option<Handle>,
}

/// Creates a validation session for one field
///
/// `validator` receives the resolved input and options and returns an error
/// message, or `None` when the value is valid.
pub fn create_validation<V, O, F>(
    input: impl Into<Dynamic<V>>,
    options: ValidationOptions<O>,
    validator: F,
) -> ValidationSession<V, O>
where
    V: Clone + Send + Sync + 'static,
    O: FieldOptions,
    F: Fn(&V, &Resolved<O::Resolved>) -> Option<String> + Send + Sync + 'static,
{
    ValidationSession::new(input, options, validator)
}

impl<V, O> ValidationSession<V, O>
where
    V: Clone + Send + Sync + 'static,
    O: FieldOptions,
{
    pub fn new<F>(input: impl Into<Dynamic<V>>, options: ValidationOptions<O>, validator: F) -> Self
    where
        F: Fn(&V, &Resolved<O::Resolved>) -> Option<String> + Send + Sync + 'static,
    {
        let (error, _) = watch::channel(None);
        let debouncer = Mutex::new(Debouncer::new(options.debounce_timeout));

        Self {
            inner: Arc::new(Inner {
                input: input.into(),
                options,
                validator: Box::new(validator),
                error,
                debouncer,
                runtime: Handle::try_current().ok(),
            }),
        }
    }

    /// Validates now, superseding any pending debounced run
    pub fn validate(&self) -> Option<String> {
        let mut debouncer = self.inner.debouncer();
        if debouncer.cancel() {
            debug!("immediate validation superseded a pending debounced run");
        }
        self.inner.run()
    }

    /// Validates once `debounce_timeout` has passed without another call
    ///
    /// Input and options are read when the run fires, not when it is
    /// scheduled. Outside a tokio runtime this validates immediately.
    pub fn validate_debounced(&self) {
        let runtime = match Handle::try_current().ok().or_else(|| self.inner.runtime.clone()) {
            Some(runtime) => runtime,
            None => {
                warn!("no tokio runtime available for debounced validation, validating immediately");
                self.validate();
                return;
            }
        };

        let weak: Weak<Inner<V, O>> = Arc::downgrade(&self.inner);
        let mut debouncer = self.inner.debouncer();
        debouncer.schedule(&runtime, move |ticket| {
            if let Some(inner) = weak.upgrade() {
                inner.fire(ticket);
            }
        });
        debug!(timeout_ms = debouncer.timeout().as_millis() as u64, "debounced validation scheduled");
    }

    /// Drops a pending debounced run without validating
    pub fn cancel(&self) -> bool {
        self.inner.debouncer().cancel()
    }

    /// Clears the error and any pending run
    pub fn reset(&self) {
        let mut debouncer = self.inner.debouncer();
        debouncer.cancel();
        self.inner.error.send_replace(None);
    }

    pub fn is_pending(&self) -> bool {
        self.inner.debouncer().is_pending()
    }

    /// Current validation error
    pub fn error(&self) -> Option<String> {
        self.inner.error.borrow().clone()
    }

    /// Change notifications for the error slot
    pub fn subscribe_error(&self) -> watch::Receiver<Option<String>> {
        self.inner.error.subscribe()
    }

    pub fn debounce_timeout(&self) -> Duration {
        self.inner.options.debounce_timeout
    }
}

impl<V, O: FieldOptions> Clone for ValidationSession<V, O> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V, O: FieldOptions> Inner<V, O>
where
    V: Clone,
{
    fn debouncer(&self) -> MutexGuard<'_, Debouncer> {
        self.debouncer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs the validator and publishes the result. Callers hold the debouncer lock.
    fn run(&self) -> Option<String> {
        let value = self.input.get();
        let options = self.options.resolve();
        let result = (self.validator)(&value, &options);

        self.error.send_if_modified(|current| {
            if *current == result {
                false
            } else {
                *current = result.clone();
                true
            }
        });

        result
    }

    fn fire(&self, ticket: Ticket) {
        let mut debouncer = self.debouncer();
        if !debouncer.complete(ticket) {
            debug!("stale debounced validation skipped");
            return;
        }
        let result = self.run();
        debug!(valid = result.is_none(), "debounced validation ran");
    }
}
