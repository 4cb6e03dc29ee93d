mod error;
mod vector;


pub use error::CodecError;
pub use vector::VectorCodec;
