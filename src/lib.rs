mod error;
mod lcg;
mod noise;
mod texture;
mod utils;

pub use error::*;
pub use lcg::*;
pub use noise::*;
pub use texture::*;
