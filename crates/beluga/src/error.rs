#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("graph contains an edge with a missing endpoint: {i}-{j} ({nodes} nodes)")]
    MissingEndpoint { i: usize, j: usize, nodes: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
