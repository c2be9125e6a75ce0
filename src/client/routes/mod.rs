pub mod about;
pub mod gallery;
pub mod generate;
pub mod home;
pub mod not_found;

pub use about::About;
pub use gallery::Gallery;
pub use generate::Generate;
pub use home::Home;
pub use not_found::NotFound;
