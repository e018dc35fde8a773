// LogSift - app/mod.rs
//
// Application layer: run orchestration and I/O.
// Dependencies: core layer.

pub mod run;
