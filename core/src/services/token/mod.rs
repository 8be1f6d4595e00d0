//! Token service module for JWT management
//!
//! Signs identity claims into HS256 tokens and verifies them. Verification is
//! a pure function of (token, clock): nothing is persisted and nothing is
//! looked up.

mod service;

#[cfg(test)]
mod tests;

pub use service::TokenService;
