//! Keyed, cancellable postal lookups.
//!
//! Each lookup is keyed by the postal code that started it. A newer edit
//! aborts the lookup in flight, and a result whose key no longer matches the
//! current postal code is dropped instead of overwriting what the user typed.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::form::ProfileForm;
use crate::validate::validate_postal_code;

use super::{Locality, PostcodeResolver};

/// A lookup result together with the postal code it answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutofillResult {
    pub postcode: String,
    pub locality: Locality,
}

/// Drives postal lookups for one form.
///
/// Must be used from within a tokio runtime: lookups run as spawned tasks.
pub struct PostalAutofill {
    resolver: Arc<dyn PostcodeResolver>,
    current: watch::Sender<Option<String>>,
    pending: Option<JoinHandle<Option<AutofillResult>>>,
}

impl PostalAutofill {
    pub fn new(resolver: Arc<dyn PostcodeResolver>) -> Self {
        let (current, _) = watch::channel(None);
        Self {
            resolver,
            current,
            pending: None,
        }
    }

    /// Postal code the next accepted result must match.
    pub fn current_key(&self) -> Option<String> {
        self.current.borrow().clone()
    }

    /// Whether a lookup is still running.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Whether a lookup was started and not yet settled or cancelled.
    pub fn has_lookup(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a postal code edit.
    ///
    /// A valid code starts a lookup keyed by that code; anything else only
    /// invalidates the previous key. Returns `true` if a lookup was started.
    pub fn postal_code_changed(&mut self, postcode: &str) -> bool {
        let postcode = postcode.trim();
        if self.pending.is_some() && self.current.borrow().as_deref() == Some(postcode) {
            return false;
        }

        self.cancel_pending();

        if !validate_postal_code(postcode) {
            self.current.send_replace(None);
            return false;
        }

        let key = postcode.to_string();
        self.current.send_replace(Some(key.clone()));

        let resolver = Arc::clone(&self.resolver);
        let key_rx = self.current.subscribe();
        debug!(postcode = %key, "starting postcode lookup");
        self.pending = Some(tokio::spawn(async move {
            let outcome = resolver.resolve(&key).await;
            let still_current = key_rx.borrow().as_deref() == Some(key.as_str());
            match outcome {
                Ok(locality) if still_current => Some(AutofillResult {
                    postcode: key,
                    locality,
                }),
                Ok(_) => {
                    info!(postcode = %key, "discarding stale postcode lookup");
                    None
                }
                Err(err) => {
                    warn!(postcode = %key, error = %err, "postcode lookup failed");
                    None
                }
            }
        }));
        true
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                debug!("cancelling superseded postcode lookup");
            }
            handle.abort();
        }
    }

    /// Wait for the lookup in flight, if any.
    ///
    /// Returns `None` when nothing is pending, the lookup failed, or its key
    /// has been superseded.
    pub async fn settle(&mut self) -> Option<AutofillResult> {
        let handle = self.pending.take()?;
        let result = match handle.await {
            Ok(result) => result?,
            Err(err) => {
                if !err.is_cancelled() {
                    warn!(error = %err, "postcode lookup task failed");
                }
                return None;
            }
        };

        if self.current.borrow().as_deref() == Some(result.postcode.as_str()) {
            Some(result)
        } else {
            None
        }
    }

    /// Wait for the lookup and copy city and state into `form`.
    ///
    /// Nothing is applied unless the result answers the form's current
    /// postal code.
    pub async fn settle_into(&mut self, form: &mut ProfileForm) -> Option<Locality> {
        let result = self.settle().await?;
        if result.postcode != form.postal_code() {
            info!(
                postcode = %result.postcode,
                current = %form.postal_code(),
                "postcode lookup no longer matches the form"
            );
            return None;
        }
        form.apply_locality(&result.locality);
        Some(result.locality)
    }
}

impl Drop for PostalAutofill {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::error::{Result, RosterError};
    use crate::form::Field;

    /// Resolver answering from a table after a per-code delay.
    struct FakeResolver {
        answers: HashMap<&'static str, (u64, Option<Locality>)>,
        calls: AtomicUsize,
        completed: AtomicUsize,
    }

    impl FakeResolver {
        fn new(answers: &[(&'static str, u64, Option<(&str, &str)>)]) -> Arc<Self> {
            let answers = answers
                .iter()
                .map(|(code, delay, locality)| {
                    let locality = locality.map(|(city, state)| Locality {
                        city: Some(city.to_string()),
                        state: Some(state.to_string()),
                    });
                    (*code, (*delay, locality))
                })
                .collect();
            Arc::new(Self {
                answers,
                calls: AtomicUsize::new(0),
                completed: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl PostcodeResolver for FakeResolver {
        async fn resolve(&self, postcode: &str) -> Result<Locality> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let (delay, locality) = self
                .answers
                .get(postcode)
                .cloned()
                .unwrap_or((0, None));
            tokio::time::sleep(Duration::from_millis(delay)).await;
            self.completed.fetch_add(1, Ordering::SeqCst);
            locality.ok_or_else(|| RosterError::Lookup("no such postcode".to_string()))
        }
    }

    #[tokio::test]
    async fn test_valid_code_fills_form() {
        let resolver = FakeResolver::new(&[("560001", 5, Some(("Bengaluru", "Karnataka")))]);
        let mut autofill = PostalAutofill::new(resolver.clone());
        let mut form = ProfileForm::new();

        assert!(form.set(Field::PostalCode, "560001"));
        assert!(autofill.postal_code_changed(form.postal_code()));

        let locality = autofill.settle_into(&mut form).await.unwrap();
        assert_eq!(locality.city.as_deref(), Some("Bengaluru"));
        assert_eq!(form.get(Field::City), "Bengaluru");
        assert_eq!(form.get(Field::State), "Karnataka");
    }

    #[tokio::test]
    async fn test_invalid_code_starts_nothing() {
        let resolver = FakeResolver::new(&[]);
        let mut autofill = PostalAutofill::new(resolver.clone());

        assert!(!autofill.postal_code_changed("56000"));
        assert!(autofill.settle().await.is_none());
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 0);
        assert_eq!(autofill.current_key(), None);
    }

    #[tokio::test]
    async fn test_newer_code_supersedes_slow_lookup() {
        let resolver = FakeResolver::new(&[
            ("560001", 200, Some(("Bengaluru", "Karnataka"))),
            ("110001", 5, Some(("New Delhi", "Delhi"))),
        ]);
        let mut autofill = PostalAutofill::new(resolver.clone());
        let mut form = ProfileForm::new();

        form.set(Field::PostalCode, "560001");
        autofill.postal_code_changed(form.postal_code());
        form.set(Field::PostalCode, "110001");
        autofill.postal_code_changed(form.postal_code());

        let result = autofill.settle_into(&mut form).await.unwrap();
        assert_eq!(result.city.as_deref(), Some("New Delhi"));
        assert_eq!(form.get(Field::State), "Delhi");

        // The aborted lookup never completes, so it cannot overwrite later.
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 2);
        assert_eq!(resolver.completed.load(Ordering::SeqCst), 1);
        assert_eq!(form.get(Field::City), "New Delhi");
    }

    #[tokio::test]
    async fn test_editing_away_from_valid_code_discards_result() {
        let resolver = FakeResolver::new(&[("560001", 50, Some(("Bengaluru", "Karnataka")))]);
        let mut autofill = PostalAutofill::new(resolver.clone());
        let mut form = ProfileForm::new();
        form.set(Field::City, "Mysuru");

        form.set(Field::PostalCode, "560001");
        autofill.postal_code_changed(form.postal_code());
        form.set(Field::PostalCode, "56000");
        autofill.postal_code_changed(form.postal_code());

        assert!(autofill.settle_into(&mut form).await.is_none());
        assert_eq!(form.get(Field::City), "Mysuru");
    }

    #[tokio::test]
    async fn test_result_for_other_form_value_is_not_applied() {
        let resolver = FakeResolver::new(&[("560001", 5, Some(("Bengaluru", "Karnataka")))]);
        let mut autofill = PostalAutofill::new(resolver.clone());
        let mut form = ProfileForm::new();
        form.set(Field::PostalCode, "411001");

        autofill.postal_code_changed("560001");

        assert!(autofill.settle_into(&mut form).await.is_none());
        assert_eq!(form.get(Field::City), "");
    }

    #[tokio::test]
    async fn test_failed_lookup_leaves_form_unchanged() {
        let resolver = FakeResolver::new(&[("999999", 5, None)]);
        let mut autofill = PostalAutofill::new(resolver.clone());
        let mut form = ProfileForm::new();
        form.set(Field::City, "Pune");
        form.set(Field::State, "Maharashtra");

        form.set(Field::PostalCode, "999999");
        autofill.postal_code_changed(form.postal_code());

        assert!(autofill.settle_into(&mut form).await.is_none());
        assert_eq!(form.get(Field::City), "Pune");
        assert_eq!(form.get(Field::State), "Maharashtra");
    }

    #[tokio::test]
    async fn test_repeated_same_code_reuses_lookup() {
        let resolver = FakeResolver::new(&[("560001", 20, Some(("Bengaluru", "Karnataka")))]);
        let mut autofill = PostalAutofill::new(resolver.clone());

        assert!(autofill.postal_code_changed("560001"));
        assert!(!autofill.postal_code_changed("560001"));
        assert!(autofill.is_pending());

        assert!(autofill.settle().await.is_some());
        assert!(!autofill.has_lookup());
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 1);
    }
}
