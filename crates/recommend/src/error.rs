use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("curated recipe library is empty, nothing to recommend")]
    EmptyLibrary,

    #[error("catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
}
