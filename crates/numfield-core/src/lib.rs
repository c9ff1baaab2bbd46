//! Numeric input field engine.
//!
//! Constrains free-text input to a configurable numeric grammar while the
//! user types, then normalizes the value when the field loses focus.
//!
//! # Overview
//!
//! - **Grammar**: [`Grammar::build`] derives the acceptance pattern from a
//!   [`FieldConfig`] once per field.
//! - **Admission**: [`admit`] decides whether a keystroke or paste keeps the
//!   text grammatical.
//! - **Normalization**: [`normalize`] fixes precision, clamps to bounds and
//!   renders the display text.
//! - **Comparison**: [`compare`] checks the value against a related
//!   column's value.
//!
//! [`NumericField`] ties the four together behind focus / keydown / paste /
//! blur handlers, talking to the host through [`HostField`] and the sink
//! traits.
//!
//! # Example
//!
//! ```
//! use numfield_core::{BlurSinks, ChangeLog, DiagnosticLog, HostField, NumericField, TextBuffer};
//! use numfield_model::FieldConfig;
//!
//! let config = FieldConfig::new("amount").with_count_int(3).with_count_decimal(2);
//! let mut field = NumericField::new(config).expect("valid config");
//! let mut input = TextBuffer::new("amount").with_text("12.345");
//!
//! let mut diagnostics = DiagnosticLog::default();
//! let mut changes = ChangeLog::default();
//! let event = field.on_blur(&mut input, BlurSinks::new(&mut diagnostics, &mut changes));
//!
//! assert_eq!(event.value, "12,35");
//! assert_eq!(input.text(), "12,35");
//! ```

pub mod admission;
pub mod compare;
pub mod error;
pub mod field;
pub mod grammar;
pub mod host;
pub mod keys;
pub mod normalize;
pub mod number;
pub mod sink;

pub use admission::{Admission, Edit, admit, virtual_insert};
pub use compare::{Verdict, compare};
pub use error::{FieldError, Result};
pub use field::{KeyOutcome, NumericField};
pub use grammar::{Grammar, grammar_pattern};
pub use host::{HostField, Selection, TextBuffer};
pub use keys::{KeyPress, KeyRoute};
pub use normalize::{Normalized, normalize};
pub use sink::{
    BlurSinks, ChangeLog, ChangeSink, ControlValue, DiagnosticLog, DiagnosticSink, Discard,
    FormControl,
};

pub use numfield_model::FieldConfig;
