//! Principal administration: registration, listing, deletion, role
//! elevation and verification.

mod service;


pub use service::{NewPrincipal, PrincipalService, Registration};
