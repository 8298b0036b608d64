mod request;
mod response;

pub use request::NearestVillageQuery;
pub use response::{
    HealthResponse, MacroResponse, MicroResponse, SummaryStats, VillageMacro, VillageMicro,
};
