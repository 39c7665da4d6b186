use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Anfrage fehlgeschlagen: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Antwort konnte nicht gelesen werden: {0}")]
    Decode(#[from] serde_json::Error),
}
