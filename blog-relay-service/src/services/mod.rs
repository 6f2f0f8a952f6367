pub mod error;
pub mod gemini;

pub use error::RelayError;
pub use gemini::{GeminiClient, UpstreamResponse};
