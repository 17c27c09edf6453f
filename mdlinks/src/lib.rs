//! Expose mdlinks's internal API for use in integration testing. The reusable
//! extraction API lives in `mdlinks-core`; this crate only wires it to the
//! filesystem and the command line.
pub mod cli;
pub mod utils;
