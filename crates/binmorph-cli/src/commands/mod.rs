pub mod binarize;
pub mod config;
pub mod filter;
pub mod info;
pub mod run;
