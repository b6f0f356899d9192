//! Core library for the okr-import command line application.
//!
//! The library exposes the pieces of the OKR spreadsheet conversion pipeline
//! so that the command-line interface and the tests can drive them
//! independently. The modules are structured to keep responsibilities narrow
//! and composable: delimited-table adapters live under [`io`], entity
//! representations inside [`model`], the pure field clean-up functions in
//! [`normalize`], and the grouping plus orchestration logic under [`convert`].

pub mod convert;
pub mod error;
pub mod id;
pub mod io;
pub mod model;
pub mod normalize;
pub mod paths;

pub use error::{Result, ToolError};
