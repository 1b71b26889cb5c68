pub mod cinema_repo;

pub use cinema_repo::CinemaRepo;
