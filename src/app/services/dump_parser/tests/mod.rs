//! Test modules for the dump parser components

pub mod multiline_tests;
