//! Authentication against the hosted identity service.

mod identity;
mod session;

pub use identity::FirebaseAuth;
pub use session::SessionHandle;
