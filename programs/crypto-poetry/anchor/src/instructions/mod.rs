pub mod initialize;
pub mod generate_poetry;
pub mod close_poetry_account;
pub mod lock_poetry_account;

pub use initialize::*;
pub use generate_poetry::*;
pub use close_poetry_account::*;
pub use lock_poetry_account::*;
