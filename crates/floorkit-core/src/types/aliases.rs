//! Type aliases for commonly used shared-state types.
//!
//! The floor editor is single-threaded (GTK main loop), so state shared
//! between widgets is `Rc<RefCell<T>>` rather than anything lock-based.
//!
//! ## Usage
//!
//! ```rust
//! use floorkit_core::types::*;
//!
//! let counter: Shared<u32> = shared(0);
//! *counter.borrow_mut() += 1;
//! assert_eq!(*counter.borrow(), 1);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// Use when several GTK widgets and signal handlers need the same state.
pub type Shared<T> = Rc<RefCell<T>>;

/// An optional shared reference, for lazily-initialized shared state.
pub type SharedOption<T> = Rc<RefCell<Option<T>>>;

/// A UI callback stored in RefCell for GTK signal handlers.
pub type UiCallback = Rc<RefCell<Option<Box<dyn Fn()>>>>;

/// Create a new `Shared<T>` from a value.
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Create a new `SharedOption<T>` initialized to `None`.
#[inline]
pub fn shared_none<T>() -> SharedOption<T> {
    Rc::new(RefCell::new(None))
}
