mod adventure_repo_mysql;
mod interaction_repo_mysql;
mod user_repo_mysql;

pub use adventure_repo_mysql::*;
pub use interaction_repo_mysql::*;
pub use user_repo_mysql::*;

mod util;
