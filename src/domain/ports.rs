/// Source of the analytics endpoint URL, resolved once at startup.
///
/// Keeps the fetcher independent of how the URL was obtained (CLI flag,
/// environment variable, or a test fixture pointing at a mock server).
pub trait EndpointProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
}
