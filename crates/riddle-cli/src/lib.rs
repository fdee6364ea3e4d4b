//! Console front end of the riddle generator.
//!
//! - [`command`] parses the `riddle` command line and runs it
//! - [`table`] renders a riddle as plain text
//! - [`dto`] answers JSON requests with JSON responses

pub mod command;
pub mod dto;
pub mod table;
