//! Knowledge Base Provider Implementations
//!
//! Sources of the static disease catalog.
//!
//! | Provider | Source |
//! |----------|--------|
//! | BundledKnowledgeBase | JSON compiled into the binary |
//! | JsonFileKnowledgeBase | JSON file read at startup |
//! | InMemoryKnowledgeBase | Records supplied by the caller |

pub mod bundled;
pub mod catalog;
pub mod file;
pub mod in_memory;

pub use bundled::BundledKnowledgeBase;
pub use catalog::parse_catalog;
pub use file::JsonFileKnowledgeBase;
pub use in_memory::InMemoryKnowledgeBase;
