pub mod account_repository;
pub mod tournament_repository;

pub use account_repository::AccountRepository;
pub use tournament_repository::TournamentRepository;
