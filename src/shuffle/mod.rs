pub mod adjacency;
pub mod config;
pub mod random;
pub mod ranker;
pub mod shuffler;
pub mod trace;


pub use config::*;
pub use shuffler::*;
