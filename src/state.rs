use crate::config::Config;
use crate::store::DynDocumentStore;

#[derive(Clone)]
pub struct AppState {
    pub store: DynDocumentStore,
    pub config: Config,
}
