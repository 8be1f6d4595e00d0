pub mod document;
pub mod principal;

use std::sync::Arc;

pub use document::DocumentRepository;
pub use principal::PrincipalRepository;

/// Handle over every collection of the bookstore database.
///
/// Built once by the infrastructure layer and passed explicitly into each
/// service constructor.
#[derive(Clone)]
pub struct Collections {
    pub principals: Arc<dyn PrincipalRepository>,
    pub categories: Arc<dyn DocumentRepository>,
    pub products: Arc<dyn DocumentRepository>,
    pub orders: Arc<dyn DocumentRepository>,
}
