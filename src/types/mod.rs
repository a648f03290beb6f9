pub mod forecast;
pub mod selection;
pub mod station;
pub mod zone;
