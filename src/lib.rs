pub mod adaline;
pub mod config;
pub mod convergence;
pub mod data_frame;
pub mod dataset;
pub mod error;
pub mod learner;
pub mod plot;
pub mod utils;
