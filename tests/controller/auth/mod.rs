//! Tests for sign-in, session and sign-out endpoints.

mod login;
mod logout;
mod session;

use super::*;
