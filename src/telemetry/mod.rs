pub mod config;
pub mod ctx;
pub mod ops;

use ctx::LogCtx;

// Factory helpers, one per CLI op
pub fn summarize() -> LogCtx<ops::summarize::Summarize> {
    LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData }
}
pub fn transcript() -> LogCtx<ops::transcript::Transcript> {
    LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData }
}
pub fn chunk() -> LogCtx<ops::chunk::Chunk> {
    LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData }
}
