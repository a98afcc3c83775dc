pub mod dataset;
pub mod listing;
pub mod navigator;
pub mod opener;
pub mod sample;
