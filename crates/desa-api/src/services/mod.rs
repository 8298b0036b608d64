mod macro_cache;
mod profiles;

pub use macro_cache::MacroCache;
pub use profiles::ProfileService;
