//! The post store - the post repository over a key-value substrate.

mod codec;
mod store;

pub use codec::{decode_posts, encode_posts};
pub use store::{PostStore, StoreConfig};
