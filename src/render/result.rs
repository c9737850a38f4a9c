use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum RenderedResult<T, E> {
    Ok(T),
    Err(RenderedError<E>),
}

impl<T, E> From<Result<T, E>> for RenderedResult<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(RenderedError { error }),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RenderedError<E> {
    error: E,
}
