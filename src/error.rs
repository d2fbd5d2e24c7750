use thiserror::Error;

pub type EmbedResult<T, E> = Result<T, EmbedError<E>>;

/// Adapter-level failures.
///
/// Engine failures pass through transparently: the adapter neither
/// translates nor retries them. The remaining variants mark misuse of the
/// adapter's own lifecycle contract.
#[derive(Debug, Error)]
pub enum EmbedError<E: std::error::Error> {
    #[error(transparent)]
    Engine(#[from] E),

    #[error("chart view is not mounted")]
    NotMounted,

    #[error("chart view is already mounted")]
    AlreadyMounted,

    #[error("no live chart instance")]
    NotLive,
}
