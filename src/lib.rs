// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod core;
pub mod specs;

pub mod classify;
pub mod course;
pub mod csv;
pub mod params;
pub mod report;
pub mod rounding;
pub mod runner;
