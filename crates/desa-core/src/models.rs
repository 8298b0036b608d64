pub mod geometry;
pub mod indicators;
pub mod resolution;
pub mod village;

pub use geometry::{BoundaryShape, Coordinate, VillageCentroid, VillageGeometry};
pub use indicators::{
    EducationFunnel, EducationStatus, Grade, HealthRadar, HealthStatus, IndependenceDetails,
    IndependenceIndex, VillageAnalytics,
};
pub use resolution::{ResolutionMethod, ResolutionResult};
pub use village::{
    Criminal, Digital, Disaster, Disease, Economy, Education, Health, Infrastructure, Sanitation,
    Security, Social, Village, VillageStats,
};
