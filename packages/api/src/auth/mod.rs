//! Client-side view of who the user is: token claims and role tiers.
//!
//! Nothing here is a security boundary. The backend checks every request; the
//! role list only decides which actions the UI offers.

mod claims;
mod roles;

pub use claims::{decode_claims, user_roles, Claims, ClaimsError};
pub use roles::{Permissions, RoleTier, UnknownRole};
