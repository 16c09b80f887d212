pub use super::brands::Entity as Brands;
pub use super::mobiles::Entity as Mobiles;
pub use super::users::Entity as Users;
