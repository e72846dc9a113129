pub mod model;
pub use model::Model;

pub mod repository;
pub use repository::Repository;

use navicula::types::EnvironmentType;

use super::router::Router;
use super::types;

#[derive(Clone)]
pub struct Environment {
    pub model: Model,
    pub router: Router,
}

impl EnvironmentType for Environment {
    type AppEvent = types::AppEvent;
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("model", &self.model)
            .field("router", &self.router)
            .finish()
    }
}

impl Environment {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            router: Router::default(),
        }
    }

    /// Builds the model from the configured api url
    pub fn from_repository(repository: &Repository) -> Self {
        Self::new(Model::new(repository.api_base_url()))
    }
}
