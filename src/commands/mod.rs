pub mod config;
pub mod locate;
pub mod run;
