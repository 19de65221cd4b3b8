//! Leaf actions, subcategory records and the payload encoder

pub mod catalog;
pub mod encoder;

pub use catalog::{ActionDescriptor, DerivedKey, Info, RollType, SubcategoryData, SubcategoryId};
pub use encoder::{ActionEncoder, EncodedPayload, RESERVED_KEYS};
