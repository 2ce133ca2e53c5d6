//! Key and value sanitizers for Android string resources.
//!
//! Both sanitizers are pure, total functions driven by the ordered tables in
//! [`rules`]. They run independently per record, so callers may fan them out
//! across threads.

pub mod key;
pub mod rules;
pub mod value;

pub use key::sanitize_key;
pub use value::sanitize_value;
