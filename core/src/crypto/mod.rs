pub mod types;
pub mod aead;
pub mod nonce;
pub mod keys;

pub use types::*;
pub use aead::*;
pub use nonce::*;
pub use keys::*;
