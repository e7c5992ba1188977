pub mod badge;

pub use badge::{severity_variant, Badge};
