pub mod profiles;

pub use profiles::Entity as Profiles;
pub use profiles::Model as Profile;
