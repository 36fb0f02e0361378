pub mod batch;
pub mod model;

// Re-export commonly used types/functions for consumers
pub use batch::{decode_image, decode_token, decode_tokens, FileLine, Line};
pub use model::{load_raw_bin, read_word, Endian, Image};
