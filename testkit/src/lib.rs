//! Test-data harness for Ferrule's own test suites.
//!
//! - **`random`**: Random value generators
//! - **`cases`**: Data-driven case tables
//! - **`probe`**: Iterators that record or limit how far they are pulled

pub mod cases;
pub mod probe;
pub mod random;

pub use cases::{Case, run};
pub use probe::{CountingIter, ExplodingIter, PullCount};
