mod adventure_service_impl;
mod auth_service_impl;
mod identity_provider_fake;
mod identity_provider_jwt;
mod interaction_service_impl;

pub use adventure_service_impl::*;
pub use auth_service_impl::*;
pub use identity_provider_fake::*;
pub use identity_provider_jwt::*;
pub use interaction_service_impl::*;
