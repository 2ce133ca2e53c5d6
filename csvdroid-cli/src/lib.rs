//! Library half of the `csvdroid` command, split out so the pieces can be unit tested.

pub mod config;
pub mod convert;
pub mod inspect;
pub mod validation;
