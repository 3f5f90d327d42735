//! HTTP API handlers

pub mod awards;
pub mod docs;
pub mod health;
pub mod movies;

pub use awards::producer_intervals;
pub use docs::docs_routes;
pub use health::health_routes;
pub use movies::{list_movies, studios_with_win_count, winners_by_year, years_with_multiple_winners};
