//! Wire DTOs.
//!
//! Domain records ([`store::InformationRecord`], [`store::UserAccount`]) decode
//! directly from the backend; the types here cover request bodies and the
//! response envelopes around them.

mod information;
mod session;
mod user;

pub use information::{DataEnvelope, NewInformation};
pub use session::{LoginRequest, LoginResponse, ProfileResponse};
pub use user::{NewUserAccount, UserUpdate};
