pub mod app;
pub mod components;
pub mod router;
pub mod routes;
pub mod startup;
pub mod util;

pub use app::App;
pub use startup::{Application, BootstrapError, ClientConfig};
