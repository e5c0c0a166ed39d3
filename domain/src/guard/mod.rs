//! Boundary guards — pure validation of caller-supplied inputs
//!
//! Both guards run before any network or filesystem activity and are safe
//! for unlimited concurrent use: they take a string, return a value, and
//! touch nothing else.

pub mod path;
pub mod url;

pub use path::sanitize;
pub use url::{check, UrlVerdict};
