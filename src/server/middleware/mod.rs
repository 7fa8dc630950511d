//! Request guards for access tokens and session-held refresh tokens.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
