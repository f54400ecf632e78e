//! # sentilex-core
//!
//! Core types shared by the sentilex crates.
//!
//! This crate provides:
//! - **Categories**: the closed `Category` enumeration (positive, negative, neutral, question)
//! - **Scores**: `ScoreVector`, a per-category distribution that always carries all four keys
//! - **Evidence**: `KeywordEvidence`, the tokens that drove each category's score

pub mod category;
pub mod error;
pub mod evidence;
pub mod score;

pub use category::Category;
pub use error::{Error, Result};
pub use evidence::KeywordEvidence;
pub use score::{round_to, ScoreVector};
