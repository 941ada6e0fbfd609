//! # retro-client
//!
//! Collaborators that produce retrospectives and custom insights:
//! - [`BackendClient`]: the REST backend (narrative retrospectives, daily
//!   summary submission, mock listings)
//! - [`GeminiClient`]: the Gemini LLM (full structured retrospectives,
//!   generated custom insights)
//! - [`MockSource`]: canned data for offline use
//!
//! All three implement [`RetrospectiveSource`] and [`CustomInsightSource`].

pub mod backend;
pub mod gemini;
pub mod mock;
pub mod parse;
pub mod prompts;
pub mod source;

mod error;
mod http;

pub use backend::BackendClient;
pub use error::ClientError;
pub use gemini::GeminiClient;
pub use mock::MockSource;
pub use source::{
    ConfiguredSource, CustomInsightOutcome, CustomInsightSource, InsightOrigin,
    LoadedRetrospective, RetrospectiveInsights, RetrospectiveSource,
};
