//! A controlled text field that can also be filled from a local file.
//!
//! See [`components::import_field::ImportField`].

pub mod components;

pub use components::import_field::{ImportError, ImportField, ImportFieldProps};
