//! Role Resolver: role-membership predicates backed by the principal store.

mod resolver;

pub use resolver::RoleResolver;
