pub mod navbar;
pub mod page;
pub mod title;

pub use navbar::Navbar;
pub use page::Page;
pub use title::ArtboothTitleButton;
