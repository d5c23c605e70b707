pub mod box_stats;
pub mod histogram;
pub mod rolling;
pub mod statistics;
