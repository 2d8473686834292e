//! Electronic medical record documents.
//!
//! Assembles the record shown to the patient at the end of a consultation:
//! a fixed header, the recognized registration info, the chief complaint,
//! and the advice text, wrapped to the record's column width. Rendering
//! stops at text; turning the document into an image is the display
//! layer's business.

pub mod document;
pub mod wrap;

pub use document::*;
pub use wrap::*;
