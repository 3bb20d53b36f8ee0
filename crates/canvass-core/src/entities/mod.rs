//! Entity structs for the Canvass market-research domain.
//!
//! Each persisted entity maps to a table in the libSQL database. All structs
//! derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and
//! schema validation.

mod draft;
mod project;
mod research;
mod segment;

pub use draft::ResearchDraft;
pub use project::Project;
pub use research::ResearchEntry;
pub use segment::Segment;
