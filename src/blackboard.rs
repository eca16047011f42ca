use crate::any_value::AnyValue;
use crate::backing::Backing;
use crate::config::BlackboardConfig;
use crate::error::BlackboardError;
use std::any::Any;
use std::fmt;
use tracing::{debug, trace};

/// A type-safe blackboard shared between decoupled components
///
/// Keys are strings, values can be any `Send + Sync + 'static` type. Every
/// read checks the stored type against the requested one; a read that finds
/// no key or a different type is a *miss*. The core accessors report a miss
/// with a default value (`get`, `remove`) or `None` (`try_get`,
/// `try_remove`) and never fail.
///
/// # Examples
///
/// ```
/// use blackboard_store::Blackboard;
///
/// let board = Blackboard::new();
/// board.set("age", 42i32);
///
/// assert_eq!(board.get::<i32>("age"), 42);
/// assert_eq!(board.get::<String>("age"), "");
/// assert_eq!(board.try_get::<i32>("age"), Some(42));
///
/// // The entry stays put when removed as the wrong type
/// assert_eq!(board.remove::<String>("age"), "");
/// assert!(board.contains_key("age"));
/// assert_eq!(board.remove::<i32>("age"), 42);
/// assert!(!board.contains_key("age"));
/// ```
pub struct Blackboard {
    backing: Backing,
}

impl Blackboard {
    /// Creates an empty blackboard backed by a single locked `HashMap`
    pub fn new() -> Self {
        Self {
            backing: Backing::plain(),
        }
    }

    /// Creates an empty blackboard backed by a sharded concurrent map
    ///
    /// Worth it when many threads hit different keys at the same time.
    pub fn concurrent() -> Self {
        Self {
            backing: Backing::concurrent(),
        }
    }

    pub fn with_config(config: BlackboardConfig) -> Self {
        if config.use_concurrent_map {
            Self::concurrent()
        } else {
            Self::new()
        }
    }

    /// Returns true if this blackboard was built with the concurrent map
    pub fn is_concurrent(&self) -> bool {
        self.backing.is_concurrent()
    }

    /// Stores a value, replacing whatever the key held before
    ///
    /// The entry is tagged with `T`. Replacing an entry may change its type.
    /// Always returns `true`.
    ///
    /// To store an explicit "no value", store an `Option<T>`:
    ///
    /// ```
    /// use blackboard_store::Blackboard;
    ///
    /// let board = Blackboard::new();
    /// board.set("target", Option::<String>::None);
    ///
    /// assert!(board.contains_key("target"));
    /// assert_eq!(board.try_get::<Option<String>>("target"), Some(None));
    /// assert_eq!(board.try_get::<Option<String>>("elsewhere"), None);
    /// ```
    pub fn set<T>(&self, key: impl Into<String>, value: T) -> bool
    where
        T: Any + Send + Sync,
    {
        let key = key.into();
        let value = AnyValue::new(value);
        trace!(key = %key, type_name = value.type_name(), "blackboard set");
        self.backing.insert(key, value);
        true
    }

    /// Stores the value produced by `f`
    ///
    /// `f` runs before any lock is taken, so it may read from this blackboard.
    pub fn set_with<T, F>(&self, key: impl Into<String>, f: F) -> bool
    where
        T: Any + Send + Sync,
        F: FnOnce() -> T,
    {
        let value = f();
        self.set(key, value)
    }

    /// Returns a clone of the value stored under `key`, or `T::default()` on a miss
    ///
    /// A miss cannot be told apart from a stored default value; use
    /// [`try_get`](Self::try_get) when that matters.
    pub fn get<T>(&self, key: &str) -> T
    where
        T: Any + Clone + Default,
    {
        self.try_get(key).unwrap_or_default()
    }

    /// Returns a clone of the value stored under `key`, or `None` on a miss
    pub fn try_get<T>(&self, key: &str) -> Option<T>
    where
        T: Any + Clone,
    {
        self.backing
            .read(key, |value| match value.downcast_ref::<T>() {
                Some(value) => Some(value.clone()),
                None => {
                    log_mismatch::<T>(key, value.type_name());
                    None
                }
            })
            .flatten()
    }

    /// Returns true if any value is stored under `key`
    ///
    /// `T` is not checked against the stored type: `has_value::<String>` is
    /// true for a key holding an `i32`. Use [`holds`](Self::holds) for a
    /// type-checked presence test.
    ///
    /// ```
    /// use blackboard_store::Blackboard;
    ///
    /// let board = Blackboard::new();
    /// board.set("age", 42i32);
    /// assert!(board.has_value::<String>("age"));
    /// assert!(!board.holds::<String>("age"));
    /// ```
    pub fn has_value<T: ?Sized>(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.backing.contains_key(key)
    }

    /// Returns true if `key` holds a value of exactly type `T`
    pub fn holds<T: Any>(&self, key: &str) -> bool {
        self.backing
            .read(key, |value| value.is_type::<T>())
            .unwrap_or(false)
    }

    /// Removes and returns the value under `key` if it is a `T`
    ///
    /// On a miss, including a key holding another type, the blackboard is
    /// left untouched and `T::default()` is returned.
    pub fn remove<T>(&self, key: &str) -> T
    where
        T: Any + Default,
    {
        self.try_remove(key).unwrap_or_default()
    }

    /// Removes and returns the value under `key` if it is a `T`, or `None`
    pub fn try_remove<T: Any>(&self, key: &str) -> Option<T> {
        let removed = self.backing.remove_if(key, |value| {
            let matches = value.is_type::<T>();
            if !matches {
                log_mismatch::<T>(key, value.type_name());
            }
            matches
        })?;
        trace!(key, type_name = removed.type_name(), "blackboard remove");
        removed.into_inner::<T>().ok()
    }

    /// Removes every entry
    pub fn clear(&self) {
        trace!(entries = self.backing.len(), "blackboard clear");
        self.backing.clear();
    }

    /// Runs `f` on a borrowed value without cloning it
    ///
    /// The entry stays locked while `f` runs; `f` must not call back into
    /// this blackboard.
    ///
    /// # Errors
    ///
    /// - Returns `BlackboardError::KeyNotFound` if the key doesn't exist
    /// - Returns `BlackboardError::TypeMismatch` if the stored type isn't `T`
    pub fn with<T, F, R>(&self, key: &str, f: F) -> Result<R, BlackboardError>
    where
        T: Any,
        F: FnOnce(&T) -> R,
    {
        self.backing
            .read(key, |value| match value.downcast_ref::<T>() {
                Some(typed) => Ok(f(typed)),
                None => Err(mismatch::<T>(key, value.type_name())),
            })
            .unwrap_or_else(|| Err(BlackboardError::KeyNotFound(key.to_string())))
    }

    /// Runs `f` on a mutably borrowed value, updating it in place
    ///
    /// This is the only read-modify-write that is atomic for its key.
    ///
    /// ```
    /// use blackboard_store::{Blackboard, BlackboardError};
    ///
    /// let board = Blackboard::concurrent();
    /// board.set("visits", 0u32);
    /// board.with_mut("visits", |visits: &mut u32| *visits += 1)?;
    /// assert_eq!(board.get::<u32>("visits"), 1);
    /// # Ok::<(), BlackboardError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// - Returns `BlackboardError::KeyNotFound` if the key doesn't exist
    /// - Returns `BlackboardError::TypeMismatch` if the stored type isn't `T`
    pub fn with_mut<T, F, R>(&self, key: &str, f: F) -> Result<R, BlackboardError>
    where
        T: Any,
        F: FnOnce(&mut T) -> R,
    {
        self.backing
            .write(key, |value| {
                let found = value.type_name();
                match value.downcast_mut::<T>() {
                    Some(typed) => Ok(f(typed)),
                    None => Err(mismatch::<T>(key, found)),
                }
            })
            .unwrap_or_else(|| Err(BlackboardError::KeyNotFound(key.to_string())))
    }

    /// Like [`try_get`](Self::try_get), but says why a read missed
    ///
    /// # Errors
    ///
    /// - Returns `BlackboardError::KeyNotFound` if the key doesn't exist
    /// - Returns `BlackboardError::TypeMismatch` if the stored type isn't `T`
    pub fn fetch<T>(&self, key: &str) -> Result<T, BlackboardError>
    where
        T: Any + Clone,
    {
        self.with(key, |value: &T| value.clone())
    }

    /// Returns the name of the type stored under `key`
    ///
    /// The name comes from `std::any::type_name` and is meant for
    /// diagnostics only.
    pub fn type_name_of(&self, key: &str) -> Option<&'static str> {
        self.backing.read(key, |value| value.type_name())
    }

    /// Returns all keys, in no particular order
    pub fn keys(&self) -> Vec<String> {
        self.backing.keys()
    }

    pub fn len(&self) -> usize {
        self.backing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Blackboard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Blackboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = self.backing.describe();
        entries.sort();
        f.debug_struct("Blackboard")
            .field("concurrent", &self.is_concurrent())
            .field("entries", &entries)
            .finish()
    }
}

fn mismatch<T: Any>(key: &str, found: &'static str) -> BlackboardError {
    log_mismatch::<T>(key, found);
    BlackboardError::TypeMismatch {
        key: key.to_string(),
        expected: std::any::type_name::<T>(),
        found,
    }
}

fn log_mismatch<T: Any>(key: &str, found: &'static str) {
    debug!(
        key,
        expected = std::any::type_name::<T>(),
        found,
        "blackboard type mismatch"
    );
}
