// Domain layer - Download summaries, dates and chart shapes
pub mod calendar;
pub mod chart;
pub mod downloads;
pub mod page;
pub mod summary;
