// Test-only helpers, compiled for unit tests
pub mod utils;
