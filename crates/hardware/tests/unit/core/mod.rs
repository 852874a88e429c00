//! Processor core tests.




/// Address generation, ALU and branch resolution.
pub mod units;
