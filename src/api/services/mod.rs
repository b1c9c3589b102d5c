pub mod frontend;
pub mod redirect;

pub use frontend::{FrontendService, frontend_routes};
pub use redirect::{RedirectService, redirect_routes};
