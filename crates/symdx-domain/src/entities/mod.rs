//! Domain Entities
//!
//! Objects with identity. The only entity in this domain is the
//! knowledge base record describing one candidate disease.

/// Knowledge base disease record
pub mod disease;

pub use disease::DiseaseRecord;
