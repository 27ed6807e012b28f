//! Persisted CLI configuration.

pub mod storage;
