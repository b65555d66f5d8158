pub mod pair;
pub mod role;
pub mod tournament;
pub mod user;

pub use role::Role;
