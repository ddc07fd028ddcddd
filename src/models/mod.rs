//! Request and response types exchanged with the booking backend.
//!
//! Response types keep unknown fields in an `extra` map so that newer
//! backend versions do not break decoding.

pub mod appointment;
pub mod common;
pub mod hospital;
pub mod operation;
pub mod payment;
pub mod pricing;
pub mod user;

pub use appointment::*;
pub use common::*;
pub use hospital::*;
pub use operation::*;
pub use payment::*;
pub use pricing::*;
pub use user::*;
