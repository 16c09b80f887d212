pub mod prelude;

pub mod brands;
pub mod mobiles;
pub mod users;
