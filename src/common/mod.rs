//! Shared helpers used across modules

pub mod string_utils;
