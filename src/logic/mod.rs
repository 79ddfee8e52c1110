pub mod rules;
pub mod scorer;
pub mod store;

pub use rules::RulesEngine;
pub use scorer::{assess_parameters, HealthScorer};
pub use store::PlantProfileStore;
