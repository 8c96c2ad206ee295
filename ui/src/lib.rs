//! Generic presentational widgets shared by the views.

mod navbar;
pub use navbar::Navbar;

mod spinner;
pub use spinner::LoadingSpinner;

mod stat_card;
pub use stat_card::StatCard;
