use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("No round data found on the page")]
    Missing,

    #[error("Round data is malformed: {0}")]
    Parse(String),

    #[error("Browser error: {0}")]
    Js(String),
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::Parse(err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for DataError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        DataError::Parse(err.to_string())
    }
}

impl From<DataError> for String {
    fn from(err: DataError) -> Self {
        err.to_string()
    }
}
