mod executor;
mod params;

pub use executor::QueryExecutor;
pub use params::{ParamValue, QueryParams, QueryRef};
