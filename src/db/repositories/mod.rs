pub mod brand;
pub mod mobile;
pub mod user;
