pub mod banner;
pub mod error;
pub mod process;
pub mod workload;
