//! Execution unit tests.
