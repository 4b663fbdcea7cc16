//! Interactive front end: argument parsing, filter collection, the session
//! loop and one handler per menu entry.

pub mod collector;
pub mod commands;
pub mod menu;
pub mod parser;
pub mod session;
