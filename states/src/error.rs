use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("State not found: {type_name}")]
    StateNotFound { type_name: &'static str },
    #[error("Command not registered: {type_name}")]
    CommandNotFound { type_name: &'static str },
}

impl Error {
    pub fn state_not_found<T>() -> Self {
        Self::StateNotFound {
            type_name: std::any::type_name::<T>(),
        }
    }
}
