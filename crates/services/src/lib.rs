//! Local collaborators for the tools: credential persistence and image decoding.

pub mod credential_store;
pub mod image_loader;

pub use credential_store::{CredentialError, CredentialStore};
pub use image_loader::{decode_image, load_image};
