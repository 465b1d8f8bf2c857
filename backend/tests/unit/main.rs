//! Unit tests for the nano_backend library
//!
//! These tests use mocked ports and never spawn a package manager.

mod architecture;
mod mocks;
