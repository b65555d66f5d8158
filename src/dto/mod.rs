pub mod account;
pub mod tournament;

pub use account::NewAccount;
pub use tournament::NewTournament;
