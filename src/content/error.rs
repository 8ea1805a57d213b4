use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse content catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate slug `{0}` in collection")]
    DuplicateSlug(String),

    #[error("item `{slug}` has an empty {field}")]
    EmptyField { slug: String, field: &'static str },

    #[error("image on item `{slug}` has no alt text")]
    MissingAlt { slug: String },

    #[error("failed to fetch content catalog: {0}")]
    Fetch(String),
}
