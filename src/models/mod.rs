pub mod analysis;
pub mod catalog;
pub mod observation;
pub mod plant_profile;
pub mod weather;

pub use analysis::*;
pub use catalog::PLANT_CATALOG;
pub use observation::*;
pub use plant_profile::*;
pub use weather::*;
