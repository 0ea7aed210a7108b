//! Core module - Contains the document model and its building blocks
//!
//! This module provides:
//! - The element tree (Document / Element)
//! - XML parsing, indentation and serialization
//! - Include path dialects
//! - Well-formedness checks the reader leaves out
//! - Error types

pub mod error;
pub mod model;
pub mod paths;
pub mod wellformed;
pub mod xml;
