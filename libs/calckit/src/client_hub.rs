//! Type-keyed registry of module clients.
//!
//! Providers register an implementation once under its interface type
//! (usually `dyn SomeApi`), consumers resolve it by the same type and keep
//! the `Arc` for reuse. In tests the hub can be filled with mocked
//! implementations under the same interface types.
//!
//! - Key = `type_name::<T>()`, which works for `T = dyn Trait`.
//! - Value = `Arc<T>` stored as `Box<dyn Any + Send + Sync>` (downcast on read).
//! - Re-registering overwrites the previous value; `Arc`s already handed out stay valid.

use parking_lot::RwLock;
use std::{any::Any, collections::HashMap, fmt, sync::Arc};

/// Stable type key for trait objects.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct TypeKey(&'static str);

impl TypeKey {
    #[inline]
    fn of<T: ?Sized + 'static>() -> Self {
        TypeKey(std::any::type_name::<T>())
    }

    /// Fully-qualified name of the registered interface type.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientHubError {
    #[error("client not found: type={type_key}")]
    NotFound { type_key: TypeKey },

    #[error("type mismatch in hub for type={type_key}")]
    TypeMismatch { type_key: TypeKey },
}

type Boxed = Box<dyn Any + Send + Sync>;

/// Registry of clients keyed by interface type.
pub struct ClientHub {
    map: RwLock<HashMap<TypeKey, Boxed>>,
}

impl ClientHub {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for ClientHub {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientHub {
    /// Register a client under the interface type `T`.
    /// `T` can be a trait object like `dyn calc_sdk::CalcApi`.
    pub fn register<T>(&self, client: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let type_key = TypeKey::of::<T>();
        tracing::debug!(client = type_key.name(), "registering client");
        self.map.write().insert(type_key, Box::new(client));
    }

    /// Fetch a client by interface type `T`.
    ///
    /// # Errors
    /// Returns `ClientHubError::NotFound` if nothing is registered under `T`.
    pub fn get<T>(&self) -> Result<Arc<T>, ClientHubError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let type_key = TypeKey::of::<T>();
        let r = self.map.read();

        let boxed = r.get(&type_key).ok_or_else(|| ClientHubError::NotFound {
            type_key: type_key.clone(),
        })?;

        // Stored value is exactly `Arc<T>`.
        if let Some(arc_t) = boxed.downcast_ref::<Arc<T>>() {
            return Ok(Arc::clone(arc_t));
        }
        Err(ClientHubError::TypeMismatch { type_key })
    }

    /// Remove a client; returns the removed client if it was present.
    pub fn remove<T>(&self) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let boxed = self.map.write().remove(&TypeKey::of::<T>())?;
        boxed.downcast::<Arc<T>>().ok().map(|b| *b)
    }

    /// Clear everything (useful in tests).
    pub fn clear(&self) {
        self.map.write().clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    trait Adder: Send + Sync {
        fn add(&self, a: i32, b: i32) -> i32;
    }

    struct Plain;
    impl Adder for Plain {
        fn add(&self, a: i32, b: i32) -> i32 {
            a + b
        }
    }

    struct Fixed(i32);
    impl Adder for Fixed {
        fn add(&self, _a: i32, _b: i32) -> i32 {
            self.0
        }
    }

    #[test]
    fn register_and_get_dyn_trait() {
        let hub = ClientHub::new();
        let api: Arc<dyn Adder> = Arc::new(Plain);
        hub.register::<dyn Adder>(api.clone());

        let got = hub.get::<dyn Adder>().unwrap();
        assert_eq!(got.add(2, 3), 5);
        assert!(Arc::ptr_eq(&api, &got));
    }

    #[test]
    fn re_registering_overwrites_previous_client() {
        let hub = ClientHub::new();
        hub.register::<dyn Adder>(Arc::new(Fixed(10)));
        let first = hub.get::<dyn Adder>().unwrap();

        hub.register::<dyn Adder>(Arc::new(Fixed(20)));
        let second = hub.get::<dyn Adder>().unwrap();

        assert_eq!(first.add(0, 0), 10, "Original Arc should retain its value");
        assert_eq!(second.add(0, 0), 20);
        assert_eq!(hub.len(), 1);
    }

    #[test]
    fn get_returns_not_found_for_unregistered_client() {
        let hub = ClientHub::new();

        match hub.get::<dyn Adder>() {
            Err(ClientHubError::NotFound { type_key }) => {
                assert!(type_key.name().contains("Adder"));
            }
            Err(other) => panic!("Expected NotFound error, got {other}"),
            Ok(_) => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn concrete_and_dyn_types_are_distinct_keys() {
        let hub = ClientHub::new();
        hub.register::<Plain>(Arc::new(Plain));

        assert!(hub.get::<Plain>().is_ok());
        assert!(hub.get::<dyn Adder>().is_err());
    }

    #[test]
    fn remove_and_clear() {
        let hub = ClientHub::new();
        assert!(hub.is_empty());

        hub.register::<dyn Adder>(Arc::new(Fixed(42)));
        hub.register::<Plain>(Arc::new(Plain));
        assert_eq!(hub.len(), 2);

        let removed = hub.remove::<dyn Adder>().unwrap();
        assert_eq!(removed.add(1, 1), 42);
        assert!(hub.get::<dyn Adder>().is_err());
        assert!(hub.remove::<dyn Adder>().is_none());

        hub.clear();
        assert!(hub.is_empty());
    }

    #[test]
    fn hub_is_thread_safe_under_concurrent_access() {
        let hub = Arc::new(ClientHub::new());
        hub.register::<dyn Adder>(Arc::new(Fixed(0)));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let hub = Arc::clone(&hub);
                std::thread::spawn(move || {
                    hub.register::<dyn Adder>(Arc::new(Fixed(i)));
                    hub.get::<dyn Adder>().map(|c| c.add(0, 0)).is_ok()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert!(hub.get::<dyn Adder>().unwrap().add(0, 0) < 8);
    }
}
