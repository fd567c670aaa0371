//! Value Engineering Core Library
//!
//! Decision pipeline for selecting cost-reducing substitute building materials
//! (windows, doors, appliances) while tracking how far each substitute deviates
//! from the original's function, design intent, and cost.
//!
//! # Architecture
//!
//! The pipeline is four strictly-ordered stages, each a pure transformation
//! over the previous stage's output:
//!
//! - [`matcher`]: resolve each [`MaterialSpec`](types::MaterialSpec) to its
//!   best-fit [`CostCatalogEntry`](types::CostCatalogEntry) (the baseline)
//! - [`alternatives`]: enumerate up to 3 strictly-cheaper substitutes per
//!   category-specific rule
//! - [`scorer`]: assign functional/design scores via a pluggable [`Judge`]
//!   and a cost score via a fixed reduction-percentage table
//! - [`optimizer`]: pick the highest-weighted substitute per material under a
//!   weighting [`Strategy`](types::Strategy) and aggregate savings metrics
//!
//! [`pipeline`] orchestrates a full run over validated input collections.
//!
//! # Example
//!
//! ```
//! use valueng_core::types::Strategy;
//!
//! let balanced = Strategy::balanced();
//! assert!((balanced.weights.functional - 1.0 / 3.0).abs() < 1e-9);
//! ```

pub mod alternatives;
pub mod config;
pub mod error;
pub mod judge;
pub mod matcher;
pub mod optimizer;
pub mod pipeline;
pub mod scorer;
pub mod stubs;
pub mod types;

// Re-exports for convenience
pub use config::PolicyConfig;
pub use error::{Result, ValuengError};
pub use judge::{HeuristicJudge, Judge};
pub use pipeline::{Pipeline, RunReport};
