pub mod date;
pub mod error;
pub mod features;
pub mod policy;
pub mod series;
mod stats;
pub mod transaction;

pub use error::{FeatureError, FeatureResult};
pub use features::*;
pub use policy::{FEATURE_POLICY_V1, FEATURE_POLICY_VERSION, FeaturePolicy};
pub use series::Series;
pub use transaction::Transaction;
