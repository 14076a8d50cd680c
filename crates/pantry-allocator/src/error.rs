use thiserror::Error;

pub type Result<T> = std::result::Result<T, AllocError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocError {
    /// Every generated candidate was reported as taken.
    #[error("no free identifier found after {attempts} attempts")]
    Exhausted { attempts: u32 },
}
