//! # blackboard-store
//!
//! A type-safe blackboard for sharing values between decoupled components.
//!
//! A blackboard is a shared scratch space: one part of a system (a sensor, a
//! planner step, a behavior tree node) writes a value under a string key, and
//! any other part reads it back later, naming the type it expects. Values of
//! different types live side by side; every read is checked at runtime
//! against the stored type.
//!
//! ## Key Features
//!
//! - **Type-safe**: a read with the wrong type is a miss, never a bad cast
//! - **Total**: the core accessors return a default value or `None` on a
//!   miss instead of failing
//! - **Thread-safe**: `Blackboard` is `Send + Sync`, backed either by one
//!   locked `HashMap` or by a sharded [`DashMap`](dashmap::DashMap)
//! - **Explicit absence**: storing `None` is different from storing nothing
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use blackboard_store::Blackboard;
//!
//! let board = Blackboard::new();
//!
//! board.set("enemy_visible", true);
//! board.set("ammo", 12u32);
//! board.set("last_seen_at", (4.0f32, -2.5f32));
//!
//! assert!(board.get::<bool>("enemy_visible"));
//! assert_eq!(board.get::<u32>("ammo"), 12);
//!
//! // Asking for the wrong type is a miss
//! assert_eq!(board.get::<i64>("ammo"), 0);
//! assert_eq!(board.try_get::<i64>("ammo"), None);
//!
//! // A missing key is a miss too
//! assert_eq!(board.try_get::<u32>("health"), None);
//! ```
//!
//! ### Sharing a Blackboard Between Threads
//!
//! ```rust
//! use blackboard_store::{Blackboard, BlackboardConfig};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let board = Arc::new(Blackboard::with_config(
//!     BlackboardConfig::default().use_concurrent_map(true),
//! ));
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|i| {
//!         let board = Arc::clone(&board);
//!         thread::spawn(move || {
//!             board.set(format!("sensor_{}", i), i * 10);
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(board.len(), 4);
//! assert_eq!(board.get::<i32>("sensor_3"), 30);
//! ```
//!
//! ### Error Handling
//!
//! The core accessors never fail. When the reason for a miss matters, the
//! reporting accessors return a [`BlackboardError`]:
//!
//! ```rust
//! use blackboard_store::{Blackboard, BlackboardError};
//!
//! let board = Blackboard::new();
//! board.set("waypoints", vec![(0, 0), (3, 4)]);
//!
//! match board.fetch::<String>("waypoints") {
//!     Ok(value) => println!("Waypoints: {}", value),
//!     Err(BlackboardError::KeyNotFound(key)) => println!("No {}", key),
//!     Err(BlackboardError::TypeMismatch { found, .. }) => println!("Got a {}", found),
//! }
//!
//! let count = board.with("waypoints", |points: &Vec<(i32, i32)>| points.len());
//! assert_eq!(count, Ok(2));
//! ```

mod any_value;
mod backing;
mod blackboard;
mod config;
mod error;

pub use blackboard::Blackboard;
pub use config::BlackboardConfig;
pub use error::BlackboardError;
