//! Process-wide state: lazily loaded SDK configurations and exclusive ownership slots

use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::OnceCell;
use tracing::info;

use crate::error::LoaderError;

/// A lazily initialized, process-wide value
///
/// The first caller of [`load`](SdkLoader::load) runs the initializer;
/// concurrent callers wait for it and receive the same value. A failed
/// initialization is returned to the callers and not remembered, so the next
/// call tries again.
pub struct SdkLoader<T> {
    name: &'static str,
    cell: OnceCell<Arc<T>>,
}

impl<T> SdkLoader<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            cell: OnceCell::const_new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Loaded value, if initialization already succeeded
    pub fn get(&self) -> Option<Arc<T>> {
        self.cell.get().cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    pub async fn load<F, Fut>(&self, init: F) -> Result<Arc<T>, LoaderError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, LoaderError>>,
    {
        let value = self
            .cell
            .get_or_try_init(move || async move {
                info!(sdk = self.name, "loading sdk");
                init().await.map(Arc::new)
            })
            .await?;
        Ok(Arc::clone(value))
    }
}

/// Supported payment providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentProvider {
    Stripe,
    PayPal,
}

impl PaymentProvider {
    /// Environment variable holding the provider's public key
    pub fn env_var(self) -> &'static str {
        match self {
            PaymentProvider::Stripe => "STRIPE_PUBLISHABLE_KEY",
            PaymentProvider::PayPal => "PAYPAL_CLIENT_ID",
        }
    }

    fn loader(self) -> &'static SdkLoader<PaymentSdk> {
        match self {
            PaymentProvider::Stripe => &STRIPE,
            PaymentProvider::PayPal => &PAYPAL,
        }
    }
}

/// Client-side configuration for a payment provider's SDK
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSdk {
    pub provider: PaymentProvider,
    pub public_key: String,
}

impl PaymentSdk {
    /// Reads the provider's key from the environment
    ///
    /// There is no fallback for a missing key.
    pub fn from_env(provider: PaymentProvider) -> Result<Self, LoaderError> {
        let public_key = std::env::var(provider.env_var())
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(LoaderError::MissingConfig(provider.env_var()))?;

        Ok(Self {
            provider,
            public_key,
        })
    }
}

static STRIPE: SdkLoader<PaymentSdk> = SdkLoader::new("stripe");
static PAYPAL: SdkLoader<PaymentSdk> = SdkLoader::new("paypal");

/// Loads a payment provider's SDK configuration once per process
pub async fn load_payment_sdk(provider: PaymentProvider) -> Result<Arc<PaymentSdk>, LoaderError> {
    provider
        .loader()
        .load(|| async move { PaymentSdk::from_env(provider) })
        .await
}

/// Holds the id of the single active owner of some UI resource
///
/// Anyone may read; [`activate`](ExclusiveSlot::activate) is the only way to
/// change the owner, and activating one owner implicitly deactivates the
/// previous one.
#[derive(Debug, Default)]
pub struct ExclusiveSlot {
    owner: RwLock<Option<String>>,
}

impl ExclusiveSlot {
    pub const fn new() -> Self {
        Self {
            owner: RwLock::new(None),
        }
    }

    pub fn current(&self) -> Option<String> {
        self.owner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.owner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_deref()
            == Some(id)
    }

    /// Makes `id` the active owner, or clears the slot with `None`.
    /// Returns the previous owner.
    pub fn activate(&self, id: Option<&str>) -> Option<String> {
        let mut owner = self.owner.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *owner, id.map(str::to_string))
    }
}

/// The tooltip currently shown; at most one is visible at a time
pub static TOOLTIP_OWNER: ExclusiveSlot = ExclusiveSlot::new();

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_loader_initializes_once_for_concurrent_callers() {
        static LOADER: SdkLoader<String> = SdkLoader::new("test");
        static CALLS: AtomicUsize = AtomicUsize::new(0);

        let load = || {
            LOADER.load(|| async {
                CALLS.fetch_add(1, Ordering::SeqCst);
                tokio::task::yield_now().await;
                Ok("ready".to_string())
            })
        };

        let (a, b, c) = tokio::join!(load(), load(), load());
        assert_eq!(*a.unwrap(), "ready");
        assert!(Arc::ptr_eq(&b.unwrap(), &c.unwrap()));
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
        assert!(LOADER.is_loaded());
    }

    #[tokio::test]
    async fn test_loader_failure_is_not_cached() {
        let loader: SdkLoader<u32> = SdkLoader::new("flaky");

        let err = loader
            .load(|| async {
                Err(LoaderError::InitFailed {
                    sdk: "flaky".to_string(),
                    reason: "offline".to_string(),
                })
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "flaky failed to initialize: offline");
        assert!(loader.get().is_none());

        assert_eq!(*loader.load(|| async { Ok(7) }).await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_missing_payment_key_is_a_hard_failure() {
        std::env::remove_var("PAYPAL_CLIENT_ID");
        let err = load_payment_sdk(PaymentProvider::PayPal).await.unwrap_err();
        assert_eq!(err, LoaderError::MissingConfig("PAYPAL_CLIENT_ID"));
    }

    #[test]
    fn test_exclusive_slot_single_owner() {
        let slot = ExclusiveSlot::new();
        assert_eq!(slot.activate(Some("help-email")), None);
        assert!(slot.is_active("help-email"));

        assert_eq!(slot.activate(Some("help-ssn")), Some("help-email".to_string()));
        assert!(!slot.is_active("help-email"));
        assert_eq!(slot.current(), Some("help-ssn".to_string()));

        slot.activate(None);
        assert_eq!(slot.current(), None);
    }
}
