//! Array-style traversal helpers over a keyed, insertion-ordered collection.
//!
//! [`KeyedCollection`] wraps one map from [`Key`] to a single element type
//! and exposes `every` / `some` / `filter` / `find` / `map` style helpers,
//! each in a synchronous form plus two async variants: `*_async_each`
//! awaits one callback at a time, `*_async_all` dispatches every callback
//! up front and joins the whole batch.

pub mod collection;
pub mod key;
pub mod merge;

pub use collection::KeyedCollection;
pub use key::Key;
pub use merge::Merge;
