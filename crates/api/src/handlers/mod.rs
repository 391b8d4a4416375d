pub mod model;
pub mod predictions;
