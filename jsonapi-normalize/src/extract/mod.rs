//! The three extraction passes a normalize call is made of. Each one reads the input
//! and returns a fresh fragment; nothing here touches the accumulated store.

pub mod endpoint;
pub mod entity;
pub mod relationship;

pub use self::endpoint::extract_meta_data;
pub use self::entity::extract_entities;
pub use self::relationship::extract_relationships;
