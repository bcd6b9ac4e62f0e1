#![cfg_attr(not(any(feature = "std", test)), no_std)]

//! `TinyMap`: a small map stored as a slice of key-value pairs.
//!
//! `TinyMap` replaces a hash map where only a handful of entries are stored,
//! for example per-connection user data in a network server. Lookups scan the
//! entries linearly: for a few keys this beats hashing, because there is no
//! hash to compute and all keys sit next to each other in memory.
//!
//! This crate is `no_std` compatible and needs only `alloc`.
//!
//! # Example
//!
//! ```
//! use tinymap::TinyMap;
//!
//! let mut map = TinyMap::new();
//! map.set("user_id", 42);
//! map.set(b"session", 7);
//! map.set("user_id", 43); // updates in place
//!
//! assert_eq!(map.get("user_id"), Some(&43));
//! assert_eq!(map.get("missing"), None);
//!
//! let keys: Vec<&[u8]> = map.keys().collect();
//! assert_eq!(keys, [&b"user_id"[..], &b"session"[..]]);
//! ```
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `set()`, `get()`, `get_mut()`, `contains_key()`: O(n) - linear scan
//! - `reset()`: O(n) - disposes and drops every value
//! - `len()`, `is_empty()`, `capacity()`: O(1)
//! - Iteration and `visit_values()`: O(n), in insertion order
//!
//! ## Reuse Without Reallocation
//!
//! `reset()` sets the length to zero but keeps the slot array and every key
//! buffer. The following `set()` calls refill the retired slots, copying the
//! new key into the old buffer. A map that is reset after each request stops
//! allocating once it has seen its largest request.
//!
//! ```
//! # use tinymap::TinyMap;
//! let mut map = TinyMap::new();
//! for request in 0..3 {
//!     map.set("method", request);
//!     map.set("path", request);
//!     let capacity = map.capacity();
//!     map.reset();
//!     assert_eq!(map.capacity(), capacity);
//! }
//! ```
//!
//! # Disposing Values
//!
//! Values that hold resources implement [`Dispose`] and expose it through
//! [`Value::as_dispose`]. `reset()` disposes them exactly once, in insertion
//! order, and ignores failures. `try_reset()` does the same work and reports
//! the failures afterwards.
//!
//! Values of different types can share one map as `Box<dyn Value>`; each
//! value is asked for its capability when the map is reset. Values held in
//! `Rc` or `Arc` are disposed only when the map owns the last reference.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tinymap::{Dispose, DisposeError, TinyMap, Value};
//!
//! struct Handle(Rc<Cell<usize>>);
//!
//! impl Dispose for Handle {
//!     fn dispose(&mut self) -> Result<(), DisposeError> {
//!         self.0.set(self.0.get() + 1);
//!         Ok(())
//!     }
//! }
//!
//! impl Value for Handle {
//!     fn as_dispose(&mut self) -> Option<&mut dyn Dispose> {
//!         Some(self)
//!     }
//! }
//!
//! let closed = Rc::new(Cell::new(0));
//! let mut map: TinyMap<Box<dyn Value>> = TinyMap::new();
//! map.set("file", Box::new(Handle(Rc::clone(&closed))));
//! map.set("retries", Box::new(3u32));
//!
//! map.reset();
//! assert_eq!(closed.get(), 1);
//! assert!(map.is_empty());
//! ```
//!
//! # Features
//!
//! - `std`: links the standard library; buffered writers become values that
//!   flush on reset, and I/O failures keep their `std::io::ErrorKind`.
//! - `log`: reports disposal failures of `reset()` through the `log` crate.
//!
//! The writer and logging tests are declared with `required-features`, so a
//! plain `cargo test` skips them. Run `cargo test --all-features` to cover
//! every feature.

extern crate alloc;

mod core;
mod dispose;
mod entry;
mod error;
mod iter;

// Re-export public types and traits
pub use crate::core::TinyMap;
pub use dispose::{Dispose, Value};
pub use error::{DisposeError, TinyMapError};
pub use iter::{Keys, TinyMapIter, Values};
