//! # pdfvocab Core Domain Models
//!
//! Value types shared by the text-analysis and report-generation crates.
//!
//! ## Key Models
//!
//! - **KnownWords**: immutable set of lowercase words excluded from the unknown-words report
//! - **FrequencyTable**: token counts in first-occurrence order
//! - **FrequencyPartition**: known/unknown halves of a table
//! - **RankedList**: entries by descending count, ties in first-occurrence order
//!
//! A token is a plain `String`: lowercase, alphabetic, lemmatized.

pub mod frequency;
pub mod vocabulary;


pub use frequency::*;
pub use vocabulary::*;
