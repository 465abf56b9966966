//! Type system utilities and aliases.
//!
//! ## Modules
//!
//! - [`aliases`]: Type aliases for `Rc<RefCell<T>>` and UI callbacks.

pub mod aliases;

pub use aliases::*;
