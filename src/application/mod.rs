// Application layer - Shaping and page use cases
pub mod page_service;
pub mod shaper;
pub mod stats_repository;
