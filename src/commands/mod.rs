pub mod browse;
pub mod index;
pub mod request;
pub mod show;
