/// Construction options for a [`Blackboard`](crate::Blackboard)
///
/// The backing mode is fixed once the blackboard is built.
///
/// # Examples
///
/// ```
/// use blackboard_store::{Blackboard, BlackboardConfig};
///
/// let config = BlackboardConfig::default().use_concurrent_map(true);
/// let board = Blackboard::with_config(config);
/// assert!(board.is_concurrent());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BlackboardConfig {
    /// Back the blackboard with a sharded concurrent map instead of a single
    /// locked `HashMap`. Defaults to `false`.
    pub use_concurrent_map: bool,
}

impl BlackboardConfig {
    pub fn use_concurrent_map(mut self, enabled: bool) -> Self {
        self.use_concurrent_map = enabled;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_defaults() {
        let config: BlackboardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BlackboardConfig::default());

        let config: BlackboardConfig =
            serde_json::from_str(r#"{"use_concurrent_map": true}"#).unwrap();
        assert!(config.use_concurrent_map);
    }
}
