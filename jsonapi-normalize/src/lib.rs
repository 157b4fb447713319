//! Flattens JSON:API documents into a lookup store keyed by resource type and id.
//!
//! ```
//! use jsonapi_normalize::{normalize_value, NormalizeOptions};
//! use serde_json::json;
//!
//! let doc = json!({
//!     "data": [{ "type": "post", "id": 3, "attributes": { "text": "hello", "number": 3 } }]
//! });
//! let store = normalize_value(&doc, &NormalizeOptions::default()).unwrap();
//! assert_eq!(
//!     store.into_value(),
//!     json!({ "post": { "3": { "id": 3, "type": "post", "attributes": { "text": "hello", "number": 3 } } } })
//! );
//! ```

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub mod case;
pub mod error;
pub mod extract;
pub mod merge;
pub mod model;
pub mod normalize;
pub mod options;
pub mod store;

pub use crate::error::NormalizeError;
pub use crate::normalize::{normalize, normalize_str, normalize_value};
pub use crate::options::NormalizeOptions;
pub use crate::store::NormalizedStore;

pub type Result<T> = std::result::Result<T, NormalizeError>;
