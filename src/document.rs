pub mod hierarchy;
pub mod model;
