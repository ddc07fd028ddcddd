pub mod api;
pub mod auth;
pub mod cli;
pub mod client;
pub mod config;
pub mod models;
pub mod navigation;
pub mod pages;
pub mod session;
pub mod slots;
pub mod validation;

pub use auth::{Auth, AuthState};
pub use client::{ApiClient, ClientError, Payload, RequestOptions};
pub use navigation::Navigation;
pub use session::{FileTokenStore, MemoryTokenStore, Session, TokenStore};
