use crate::any_value::AnyValue;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::collections::HashMap;

/// The map behind a blackboard, chosen once at construction
///
/// Every method is a single critical section: one mutex guard for `Plain`,
/// one shard guard for `Concurrent`.
pub(crate) enum Backing {
    Plain(Mutex<HashMap<String, AnyValue>>),
    Concurrent(DashMap<String, AnyValue>),
}

impl Backing {
    pub(crate) fn plain() -> Self {
        Backing::Plain(Mutex::new(HashMap::new()))
    }

    pub(crate) fn concurrent() -> Self {
        Backing::Concurrent(DashMap::new())
    }

    pub(crate) fn is_concurrent(&self) -> bool {
        matches!(self, Backing::Concurrent(_))
    }

    /// Insert or replace, returning the previous entry
    pub(crate) fn insert(&self, key: String, value: AnyValue) -> Option<AnyValue> {
        match self {
            Backing::Plain(map) => map.lock().insert(key, value),
            Backing::Concurrent(map) => map.insert(key, value),
        }
    }

    /// Run `f` on the entry for `key` while it is locked
    pub(crate) fn read<R>(&self, key: &str, f: impl FnOnce(&AnyValue) -> R) -> Option<R> {
        match self {
            Backing::Plain(map) => map.lock().get(key).map(f),
            Backing::Concurrent(map) => map.get(key).map(|entry| f(entry.value())),
        }
    }

    pub(crate) fn write<R>(&self, key: &str, f: impl FnOnce(&mut AnyValue) -> R) -> Option<R> {
        match self {
            Backing::Plain(map) => map.lock().get_mut(key).map(f),
            Backing::Concurrent(map) => map.get_mut(key).map(|mut entry| f(entry.value_mut())),
        }
    }

    /// Remove the entry only if `predicate` accepts it; the check and the
    /// removal happen under the same lock.
    pub(crate) fn remove_if(
        &self,
        key: &str,
        predicate: impl FnOnce(&AnyValue) -> bool,
    ) -> Option<AnyValue> {
        match self {
            Backing::Plain(map) => {
                let mut map = map.lock();
                if map.get(key).is_some_and(predicate) {
                    map.remove(key)
                } else {
                    None
                }
            }
            Backing::Concurrent(map) => map
                .remove_if(key, |_, value| predicate(value))
                .map(|(_, value)| value),
        }
    }

    pub(crate) fn contains_key(&self, key: &str) -> bool {
        match self {
            Backing::Plain(map) => map.lock().contains_key(key),
            Backing::Concurrent(map) => map.contains_key(key),
        }
    }

    pub(crate) fn clear(&self) {
        match self {
            Backing::Plain(map) => map.lock().clear(),
            Backing::Concurrent(map) => map.clear(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Backing::Plain(map) => map.lock().len(),
            Backing::Concurrent(map) => map.len(),
        }
    }

    pub(crate) fn keys(&self) -> Vec<String> {
        match self {
            Backing::Plain(map) => map.lock().keys().cloned().collect(),
            Backing::Concurrent(map) => map.iter().map(|entry| entry.key().clone()).collect(),
        }
    }

    /// Key and stored type name of every entry, for `Debug`
    pub(crate) fn describe(&self) -> Vec<(String, &'static str)> {
        match self {
            Backing::Plain(map) => map
                .lock()
                .iter()
                .map(|(key, value)| (key.clone(), value.type_name()))
                .collect(),
            Backing::Concurrent(map) => map
                .iter()
                .map(|entry| (entry.key().clone(), entry.value().type_name()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both() -> [Backing; 2] {
        [Backing::plain(), Backing::concurrent()]
    }

    #[test]
    fn test_insert_replaces_previous_entry() {
        for backing in both() {
            assert!(backing.insert("k".to_string(), AnyValue::new(1i32)).is_none());
            let previous = backing
                .insert("k".to_string(), AnyValue::new("two".to_string()))
                .unwrap();
            assert!(previous.is_type::<i32>());
            assert_eq!(backing.len(), 1);
            assert_eq!(
                backing.read("k", |v| v.downcast_ref::<String>().cloned()),
                Some(Some("two".to_string()))
            );
        }
    }

    #[test]
    fn test_remove_if_rejected_keeps_entry() {
        for backing in both() {
            backing.insert("k".to_string(), AnyValue::new(1i32));

            assert!(backing.remove_if("k", |v| v.is_type::<u64>()).is_none());
            assert!(backing.contains_key("k"));

            let removed = backing.remove_if("k", |v| v.is_type::<i32>()).unwrap();
            assert_eq!(removed.into_inner::<i32>().unwrap(), 1);
            assert!(!backing.contains_key("k"));
            assert!(backing.remove_if("k", |_| true).is_none());
        }
    }

    #[test]
    fn test_write_missing_key_does_not_call_closure() {
        for backing in both() {
            let called = backing.write("missing", |_| panic!("must not be called"));
            assert!(called.is_none());
        }
    }

    #[test]
    fn test_keys_describe_and_clear() {
        for backing in both() {
            backing.insert("a".to_string(), AnyValue::new(true));
            backing.insert("b".to_string(), AnyValue::new(2u8));

            let mut keys = backing.keys();
            keys.sort();
            assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);

            let mut described = backing.describe();
            described.sort();
            assert_eq!(
                described,
                vec![("a".to_string(), "bool"), ("b".to_string(), "u8")]
            );

            backing.clear();
            assert_eq!(backing.len(), 0);
            backing.clear();
            assert!(backing.keys().is_empty());
        }
    }

    #[test]
    fn test_mode_flag() {
        assert!(!Backing::plain().is_concurrent());
        assert!(Backing::concurrent().is_concurrent());
    }
}
