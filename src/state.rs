use crate::fetcher::SalesSource;
use crate::notify::Notices;
use crate::session::{SessionGate, TokenStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub session: SessionGate,
    pub sales: Arc<dyn SalesSource>,
    pub notices: Notices,
}

impl AppState {
    pub fn new(store: Arc<dyn TokenStore>, sales: Arc<dyn SalesSource>) -> Self {
        let notices = Notices::new();
        Self {
            session: SessionGate::new(store, notices.clone()),
            sales,
            notices,
        }
    }
}
