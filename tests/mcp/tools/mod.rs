mod config;
mod lookup;
mod scan;
mod stats;
