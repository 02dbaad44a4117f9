//! Authentication service layer.
//!
//! [`login::LoginService`] exchanges a credential pair for an identity with the
//! marketplace, and [`session::SessionService`] turns that identity into a
//! signed session token and reads it back on later requests.

pub mod login;
pub mod session;
