pub use util::jwt::Claims;

/// Claims of the authenticated caller, inserted into request extensions by the guards.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);
