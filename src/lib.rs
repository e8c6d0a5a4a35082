//! # toy-robot
//!
//! A toy robot roaming a 5x5 tabletop, driven by text commands
//! (`PLACE X,Y,F`, `MOVE`, `LEFT`, `RIGHT`, `REPORT`).
//!
//! The [`Robot`] state machine enforces every rule: it cannot act before it
//! is placed and it refuses to step off the table. The [`CommandInterpreter`]
//! turns lines of text into robot operations, and [`session::run`] drives an
//! interpreter from any line source.

pub mod error;
pub mod interpreter;
pub mod robot;
pub mod session;
pub mod table;

pub use error::*;
pub use interpreter::*;
pub use robot::*;
pub use session::{OutputFormat, SessionConfig, SessionSummary};
pub use table::{Heading, Position};
