//! # Floem breakpoints
//!
//! Named viewport breakpoints and the CSS media queries they stand for.
//!
//! A breakpoint key is a size class, optionally prefixed by a comparison:
//! `phone`, `<mobile`, `<=tablet`, `>=desktop`, `>widescreen`. Two keys joined
//! by a single space form a compound key whose query is the conjunction of
//! both, e.g. `<widescreen >=smallscreen`.
//!
//! ```
//! use floem_breakpoints::{lookup, standard};
//!
//! assert_eq!(lookup("phone"), Some("(max-width: 320px)"));
//! assert_eq!(
//!     lookup("<widescreen >=smallscreen"),
//!     Some("(max-width: 1139px) and (min-width: 960px)")
//! );
//! assert_eq!(lookup("desktop"), None);
//! assert_eq!(standard().len(), 26);
//! ```
//!
//! ## Boundaries
//!
//! Each size class has one boundary pixel `b`, the last width matched by
//! `<=class`:
//!
//! | key       | query                |
//! |-----------|----------------------|
//! | `<class`  | `(max-width: b-1px)` |
//! | `<=class` | `(max-width: bpx)`   |
//! | `>=class` | `(min-width: bpx)`   |
//! | `>class`  | `(min-width: b+1px)` |
//!
//! The standard boundaries are phone 320, mobile 667, tablet 768,
//! povertyscreen 840, smallscreen 960, desktop 1024 and widescreen 1140.
//! `phone` only has a bare key, `(max-width: 320px)`.
//!
//! ## Custom tables
//!
//! [`BreakpointTable::new`] builds a table from a [`Breakpoints`]
//! configuration. With the `serde` feature the configuration can be
//! deserialized, and a table serializes as a `key -> query` map.

pub mod config;
pub mod error;
pub mod key;
pub mod query;
pub mod size_class;
mod table;

pub use config::{Breakpoints, SizeClassBreakpoint};
pub use error::BreakpointError;
pub use key::{BreakpointKey, CompoundKey};
pub use query::{Condition, MediaFeature, MediaQuery};
pub use size_class::{Comparison, SizeClass, Variants};
pub use table::{BreakpointTable, lookup, standard};
