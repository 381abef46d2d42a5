//! Model registry: load-once, read-many cache of per-disease predictors.

use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::Disease;
use crate::ports::ModelLoader;

type Slot<M> = Mutex<Option<Arc<M>>>;

/// Caches one predictor per disease for the process lifetime.
///
/// The first `get` for a disease deserializes the model through the loader;
/// every later call returns the cached `Arc` without touching storage. Each
/// slot is populated under its own mutex, so a race on first access performs
/// exactly one load. Models are never mutated or evicted after load.
pub struct ModelRegistry<L: ModelLoader> {
    loader: L,
    slots: [Slot<L::Model>; 3],
}

impl<L: ModelLoader> ModelRegistry<L> {
    #[must_use]
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            slots: [Mutex::new(None), Mutex::new(None), Mutex::new(None)],
        }
    }

    /// Get the cached model for `disease`, loading it on first access.
    ///
    /// # Errors
    /// Returns the loader's error if the backing artifact is absent or
    /// corrupt. There is no retry and no fallback model.
    pub fn get(&self, disease: Disease) -> Result<Arc<L::Model>, L::Error> {
        let mut slot = self.slots[disease.index()]
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(model) = slot.as_ref() {
            return Ok(Arc::clone(model));
        }

        tracing::info!("Loading {disease} model...");
        let model = Arc::new(self.loader.load(disease)?);
        *slot = Some(Arc::clone(&model));
        Ok(model)
    }

    /// Whether the model for `disease` has been loaded.
    #[must_use]
    pub fn is_loaded(&self, disease: Disease) -> bool {
        self.slots[disease.index()]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InputRecord;
    use crate::ports::{InferenceError, Predictor};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubModel;

    impl Predictor for StubModel {
        fn infer(&self, _record: &InputRecord) -> Result<i64, InferenceError> {
            Ok(0)
        }
    }

    struct CountingLoader {
        loads: AtomicUsize,
        fail: bool,
    }

    impl CountingLoader {
        fn new(fail: bool) -> Self {
            Self {
                loads: AtomicUsize::new(0),
                fail,
            }
        }
    }

    impl ModelLoader for CountingLoader {
        type Model = StubModel;
        type Error = std::io::Error;

        fn load(&self, _disease: Disease) -> Result<StubModel, Self::Error> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "artifact missing",
                ))
            } else {
                Ok(StubModel)
            }
        }
    }

    #[test]
    fn test_loads_once_per_disease() {
        let registry = ModelRegistry::new(CountingLoader::new(false));

        let first = registry.get(Disease::Heart).expect("load");
        let second = registry.get(Disease::Heart).expect("cached");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.loader.loads.load(Ordering::SeqCst), 1);

        registry.get(Disease::Liver).expect("load");
        assert_eq!(registry.loader.loads.load(Ordering::SeqCst), 2);
        assert!(registry.is_loaded(Disease::Heart));
        assert!(!registry.is_loaded(Disease::Diabetes));
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let registry = ModelRegistry::new(CountingLoader::new(true));

        assert!(registry.get(Disease::Diabetes).is_err());
        assert!(!registry.is_loaded(Disease::Diabetes));
        // A later call retries the load rather than caching the failure.
        assert!(registry.get(Disease::Diabetes).is_err());
        assert_eq!(registry.loader.loads.load(Ordering::SeqCst), 2);
    }
}
