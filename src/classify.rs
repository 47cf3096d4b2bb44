pub mod classifier;
pub mod params;
pub mod widget;
