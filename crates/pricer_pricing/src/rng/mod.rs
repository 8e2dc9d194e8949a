//! # Random Number Generation Infrastructure
//!
//! Standard normal variates for the Monte Carlo engine.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: All generators support seeding for deterministic sequences
//! - **Independence**: Each worker owns its own generator, seeded from a
//!   mixed per-stream seed; generators are never shared or locked
//! - **Static dispatch**: The engine is generic over [`NormalSource`], so
//!   the hot loop never goes through a vtable
//!
//! ## Module Structure
//!
//! - [`NormalSource`]: the draw-one-normal contract
//! - [`PricerRng`]: one worker's seeded N(0, 1) stream
//! - [`stream_seed`]: derives a worker's seed from a base seed
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::{stream_seed, NormalSource, PricerRng};
//!
//! // One generator per worker, all derived from one base seed
//! let mut workers: Vec<PricerRng> = (0..4)
//!     .map(|i| PricerRng::for_worker(12345, i))
//!     .collect();
//! assert_eq!(workers[2].seed(), stream_seed(12345, 2));
//!
//! let z = workers[0].next_standard_normal();
//! assert!(z.is_finite());
//! ```

mod prng;
mod source;
mod stream;

// Public re-exports
pub use prng::PricerRng;
pub use source::NormalSource;
pub use stream::{entropy_seed, stream_seed};
