// Shared unit test fixtures, compiled into the crate only during tests.

pub mod entries;
pub mod generators;
