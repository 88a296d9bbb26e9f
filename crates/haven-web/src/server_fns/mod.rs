pub mod session;
pub mod stats;
