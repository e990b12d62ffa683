//! ## Crate layout
//! - `core`: column handles, value serialization, clause builders, time ids,
//!   store versions, and configuration.
//! - `error`: public error taxonomy wrapping every core error.
//!
//! The `prelude` brings the column vocabulary and every builder trait into
//! scope:
//!
//! ```
//! use cqlkit::prelude::*;
//!
//! const VIEWS: CounterColumn = CounterColumn::new("views");
//! const SCORES: IndexedKeyedMapColumn<String, i32> = MapColumn::new("scores").keys_indexed();
//!
//! assert_eq!(VIEWS.increment(5).to_string(), "views = views + 5");
//! assert_eq!(
//!     SCORES.contains_key("alice").unwrap().to_string(),
//!     "scores CONTAINS KEY 'alice'"
//! );
//! ```
//!
//! Operations a column kind does not support are not there to call.
//! A counter has no collection operations:
//!
//! ```compile_fail
//! use cqlkit::prelude::*;
//!
//! const VIEWS: CounterColumn = CounterColumn::new("views");
//! let _ = VIEWS.append(1);
//! ```
//!
//! `CONTAINS` needs a secondary index on the collection:
//!
//! ```compile_fail
//! use cqlkit::prelude::*;
//!
//! const TAGS: ListColumn<String> = ListColumn::new("tags");
//! let _ = TAGS.contains("x");
//! ```
//!
//! `CONTAINS KEY` needs an index on the keys, not the values:
//!
//! ```compile_fail
//! use cqlkit::prelude::*;
//!
//! const ATTRS: IndexedMapColumn<String, String> = MapColumn::new("attrs").indexed();
//! let _ = ATTRS.contains_key("k");
//! ```
//!
//! Element types must match the column:
//!
//! ```compile_fail
//! use cqlkit::prelude::*;
//!
//! const LABELS: SetColumn<String> = SetColumn::new("labels");
//! let _ = LABELS.add(5);
//! ```
//!
//! Token comparisons only exist on partition keys:
//!
//! ```compile_fail
//! use cqlkit::prelude::*;
//!
//! const TAGS: ListColumn<String> = ListColumn::new("tags");
//! let _ = TAGS.token_eq("x");
//! ```
//!
//! Byte buffers are `blob` values through `Blob`. A bare `Vec<u8>` is not a
//! column value:
//!
//! ```compile_fail
//! use cqlkit::prelude::*;
//!
//! const PAYLOADS: ListColumn<Vec<u8>> = ListColumn::new("payloads");
//! let _ = PAYLOADS.append(vec![1u8]);
//! ```
//!
//! Bound map entries are supplied value first:
//!
//! ```compile_fail
//! use cqlkit::prelude::*;
//!
//! const SCORES: MapColumn<String, i32> = MapColumn::new("scores");
//! let _ = SCORES.set_bound().bind(("alice".to_string(), 5));
//! ```

pub use cqlkit_core as core;

pub mod error;

// third-party types that appear in column value positions
pub use chrono;
pub use uuid;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::Error;

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        config::QueryConfig,
        prelude::*,
        types::TimeIdGenerator,
        version::{StoreFeature, Version},
    };
}
