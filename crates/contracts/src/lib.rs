//! Types and pure derivations shared by the admin frontend.
//!
//! Everything here is target-independent so it can be unit-tested natively,
//! without a browser.

pub mod usecases;
