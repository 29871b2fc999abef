// Common utilities shared between user-facing macros
//
// This module contains:
// - parse_utils: `available!` input grammar

mod parse_utils;

pub use parse_utils::*;
