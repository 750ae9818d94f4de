pub mod dates;
pub mod listing;
