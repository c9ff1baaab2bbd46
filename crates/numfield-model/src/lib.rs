//! Configuration and event types for numeric input fields.
//!
//! A field is described once by a [`FieldConfig`] and reports back through
//! [`ChangeEvent`]s and [`DiagnosticTag`]s. The engine itself lives in
//! `numfield-core`.

pub mod config;
pub mod enums;
pub mod error;
pub mod event;

pub use config::{FieldConfig, OtherCharacters};
pub use enums::{ComparisonPolicy, DiagnosticTag, FieldRole};
pub use error::{ConfigError, Result};
pub use event::{ChangeEvent, FieldHandle};
