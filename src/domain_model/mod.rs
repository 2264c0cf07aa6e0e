mod adventure;
mod interaction;
mod user;

pub use adventure::*;
pub use interaction::*;
pub use user::*;
