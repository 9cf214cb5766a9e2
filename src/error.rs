#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Regex(#[from] regex::Error),
    #[error(transparent)]
    FancyRegex(#[from] fancy_regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
