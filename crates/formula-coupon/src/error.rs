use thiserror::Error;

/// Error values produced by the numeric function layer.
///
/// These map 1:1 onto a subset of [`crate::value::ErrorKind`]; the value layer converts them
/// with `From<ExcelError> for ErrorKind` when wrapping results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ExcelError {
    #[error("#VALUE!")]
    Value,
    #[error("#NUM!")]
    Num,
}

pub type ExcelResult<T> = Result<T, ExcelError>;
