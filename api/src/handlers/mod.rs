pub mod error;

pub use error::{classify, forbidden_access, handle_domain_error, unauthorized_access};
