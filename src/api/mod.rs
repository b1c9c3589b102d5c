//! Browser front served by actix-web

pub mod middleware;
pub mod services;
