pub mod home;
pub mod properties;
pub mod property;

pub use home::home_page;
pub use properties::{properties_page, ListingVm};
pub use property::property_page;
