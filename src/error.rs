//! Error types for BEM name construction.

#[cfg(feature = "no_std")]
use alloc::string::String;

use thiserror::Error;

/// Caller contract violations detected while building BEM names.
///
/// Every other input (tag, attributes, style, modifiers) is optional and
/// defaults to a no-op, so these are the only failures the crate reports.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BemError {
    /// The block name was empty.
    #[error("BEM block name must not be empty")]
    EmptyBlock,

    /// An element name was supplied but it was empty.
    #[error("BEM element name must not be empty")]
    EmptyElement,

    /// A modifier name was empty.
    #[error("BEM modifier name must not be empty")]
    EmptyModifier,

    /// A block, element or modifier name, or a modifier value, contained
    /// whitespace.
    #[error("invalid BEM name {name:?}: names must not contain whitespace")]
    InvalidName { name: String },
}

/// Result type for BEM operations
pub type Result<T> = core::result::Result<T, BemError>;
