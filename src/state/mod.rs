pub mod config;
pub mod data_series;
pub mod mode;
pub mod theme;
