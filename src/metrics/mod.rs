pub mod history;

pub use history::ErrorHistory;
