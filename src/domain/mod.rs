pub mod audit;
pub mod clock;
pub mod details;
pub mod error;
pub mod id;
pub mod sink;
