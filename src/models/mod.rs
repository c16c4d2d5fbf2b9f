pub mod chart;
pub mod history;
pub mod record;

pub use chart::*;
pub use history::*;
pub use record::*;
