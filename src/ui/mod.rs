pub mod charts;
pub mod geo;
pub mod panels;
pub mod treemap;
