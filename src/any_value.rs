use std::any::{Any, TypeId};

/// A type-erased blackboard entry that remembers what was stored in it
#[derive(Debug)]
pub(crate) struct AnyValue {
    type_id: TypeId,
    type_name: &'static str,
    value: Box<dyn Any + Send + Sync>,
}

impl AnyValue {
    /// Erase a value, recording its `TypeId` and name
    pub(crate) fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            value: Box::new(value),
        }
    }

    /// Check if the contained value is exactly of type T
    pub(crate) fn is_type<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    pub(crate) fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub(crate) fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        if !self.is_type::<T>() {
            return None;
        }
        self.value.downcast_ref::<T>()
    }

    pub(crate) fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        if !self.is_type::<T>() {
            return None;
        }
        self.value.downcast_mut::<T>()
    }

    /// Move the value out of the box. Hands `self` back on a type mismatch.
    pub(crate) fn into_inner<T: 'static>(self) -> Result<T, Self> {
        if !self.is_type::<T>() {
            return Err(self);
        }
        let AnyValue {
            type_id,
            type_name,
            value,
        } = self;
        value.downcast::<T>().map(|boxed| *boxed).map_err(|value| AnyValue {
            type_id,
            type_name,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_tag_is_exact() {
        let value = AnyValue::new(42i32);

        assert!(value.is_type::<i32>());
        assert!(!value.is_type::<i64>());
        assert!(!value.is_type::<Option<i32>>());
        assert_eq!(value.type_name(), "i32");
    }

    #[test]
    fn test_downcast_ref_and_mut() {
        let mut value = AnyValue::new(vec![1u8, 2, 3]);

        assert_eq!(value.downcast_ref::<Vec<u8>>(), Some(&vec![1, 2, 3]));
        assert!(value.downcast_ref::<Vec<i8>>().is_none());

        value.downcast_mut::<Vec<u8>>().unwrap().push(4);
        assert_eq!(value.downcast_ref::<Vec<u8>>().unwrap().len(), 4);
        assert!(value.downcast_mut::<String>().is_none());
    }

    #[test]
    fn test_into_inner_returns_self_on_mismatch() {
        let value = AnyValue::new("hello".to_string());

        let value = match value.into_inner::<i32>() {
            Ok(_) => panic!("a String must not unwrap as i32"),
            Err(value) => value,
        };
        assert!(value.is_type::<String>());
        assert_eq!(value.into_inner::<String>().unwrap(), "hello");
    }

    #[test]
    fn test_none_is_a_typed_value() {
        let value = AnyValue::new(Option::<String>::None);

        assert!(value.is_type::<Option<String>>());
        assert_eq!(value.downcast_ref::<Option<String>>(), Some(&None));
    }
}
