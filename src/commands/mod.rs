pub mod history;
pub mod products;
pub mod profile;
