//! Authentication
//!
//! Single-credential login gate. The credential pair comes from the
//! environment and tokens never expire; real identity management is a
//! deliberate non-goal for this dashboard.

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentUser, JwtService};
pub use middleware::require_auth;
