//! Debugger fixture programs.
//!
//! Two standalone programs a debugger test harness runs and inspects:
//!
//! - **[`sequence`]**: a producer thread hands an unbounded counter to the
//!   consumer over a rendezvous channel; the consumer prints a fixed number
//!   of values.
//! - **[`recursive`]**: self-referential and mutually-referential types,
//!   instantiated at their zero value and printed.
//!
//! The binaries (`sequence-generator`, `recursive-types`) are thin wrappers
//! that wire [`config`] and [`logging`] around these modules.

pub mod config;
pub mod exit_codes;
pub mod logging;
pub mod recursive;
pub mod sequence;
