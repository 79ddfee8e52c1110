pub mod assessment;
pub mod catalog;
pub mod weather;

pub use assessment::{AssessmentScreen, FormField};
pub use catalog::CatalogScreen;
pub use weather::WeatherScreen;
