//! Résumé input: the payload model and the normalizer that turns it into sections.

pub mod normalize;
pub mod payload;
pub mod section;

pub use normalize::normalize;
pub use payload::{DocumentType, PayloadError, ResumePayload};
pub use section::{Line, LineKind, Section};
