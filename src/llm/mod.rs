pub mod hf;

pub use hf::{HfClient, HfClientConfig, HfError, SummaryRequest, Summarizer};
