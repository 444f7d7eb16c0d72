// Application state for HTTP handlers
use crate::application::page_service::PageService;
use crate::application::shaper::TimeSeriesShaper;

#[derive(Clone)]
pub struct AppState {
    pub page_service: PageService,
    pub shaper: TimeSeriesShaper,
}
