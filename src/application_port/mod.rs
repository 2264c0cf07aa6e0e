mod adventure_service;
mod auth_service;
mod identity_provider;
mod interaction_service;

pub use adventure_service::*;
pub use auth_service::*;
pub use identity_provider::*;
pub use interaction_service::*;
