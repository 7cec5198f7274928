mod activity;
pub use activity::*;

mod filter;
pub use filter::*;
