use crate::error::{ClientError, Result};

/// Progress of a single asynchronous request, as the view renders it.
#[derive(Debug, Default)]
pub enum RequestState<T> {
    /// Issued, no answer yet
    #[default]
    Pending,
    Success(T),
    Failure(ClientError),
}

impl<T> RequestState<T> {
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Pending | Self::Failure(_) => None,
        }
    }

    pub const fn error(&self) -> Option<&ClientError> {
        match self {
            Self::Failure(err) => Some(err),
            Self::Pending | Self::Success(_) => None,
        }
    }
}

impl<T> From<Result<T>> for RequestState<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_pending() {
        let state = RequestState::<u8>::default();
        assert!(matches!(state, RequestState::Pending));
        assert!(state.value().is_none());
    }

    #[test]
    fn converts_from_result() {
        let ok: RequestState<u8> = Ok(7).into();
        assert_eq!(ok.value(), Some(&7));

        let err: RequestState<u8> = Err(ClientError::MissingData).into();
        assert!(matches!(err.error(), Some(ClientError::MissingData)));
    }
}
