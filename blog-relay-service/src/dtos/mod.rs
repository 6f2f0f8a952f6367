pub mod generation;

pub use generation::{BlogRequestBody, GenerationRequest, DEFAULT_WORD_LIMIT};
