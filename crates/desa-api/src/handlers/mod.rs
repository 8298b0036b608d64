mod boundaries;
mod health;
mod resolve;
mod villages;

pub use boundaries::get_boundaries;
pub use health::health_check;
pub use resolve::nearest_village;
pub use villages::{get_macro, get_micro};
