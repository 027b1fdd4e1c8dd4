use crate::table::RouteTable;
use crate::view::ViewRenderer;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub renderer: Arc<dyn ViewRenderer>,
}
