pub mod faas;
pub mod faas_provider;
pub mod store;
