pub mod opts;
