//! Domain types for the value engineering pipeline.
//!
//! Every type here is an immutable record: each pipeline stage produces new
//! records and never mutates its inputs. Field names are stable — they are the
//! contract with the out-of-scope presentation layer.
//!
//! # Types
//!
//! - [`Category`], [`Dimensions`]: category tags and typed dimensions
//! - [`MaterialSpec`]: the original project requirement for one material
//! - [`CostCatalogEntry`]: a priced reference record from the cost database
//! - [`MatchResult`]: the resolved baseline entry and cost for a spec
//! - [`Alternative`]: a ranked candidate substitute (rank 0 = original)
//! - [`Assessment`], [`Score`]: the three-criterion evaluation of a substitute
//! - [`Strategy`], [`CriteriaWeights`]: named weightings of the criteria
//! - [`Selection`], [`CategoryMetrics`], [`RunMetrics`]: optimizer output

mod catalog;
mod decision;
mod material;
mod metrics;
mod score;
mod strategy;

pub use catalog::CostCatalogEntry;
pub use decision::{Alternative, MatchResult};
pub use material::{Category, Dimensions, MaterialSpec};
pub use metrics::{CategoryMetrics, RunMetrics, SelectedRank, Selection};
pub use score::{Assessment, Score};
pub use strategy::{CriteriaWeights, Strategy};
