//! CLI operation handlers.
//!
//! - [`extract_notes`]: Export merge request notes as JSON Lines

pub mod extract_notes;
