//! Round data handed over by the host page.
//!
//! The list is computed upstream and embedded in the page, either as a
//! `window.__ROUNDS__` value (an array, or a promise resolving to one) or as
//! the JSON body of `<script id="rounds-data" type="application/json">`.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::DataError;
use crate::model::Round;

pub const ROUNDS_GLOBAL: &str = "__ROUNDS__";
pub const ROUNDS_SCRIPT_ID: &str = "rounds-data";

/// Load the rounds from whichever source the page provides.
pub async fn load_rounds() -> Result<Vec<Round>, DataError> {
    let window = web_sys::window().ok_or_else(|| DataError::Js("no window".to_string()))?;

    let global = js_sys::Reflect::get(&window, &JsValue::from_str(ROUNDS_GLOBAL))
        .map_err(js_error)?;
    if !global.is_undefined() && !global.is_null() {
        let value = match global.dyn_into::<js_sys::Promise>() {
            Ok(promise) => JsFuture::from(promise).await.map_err(js_error)?,
            Err(value) => value,
        };
        return Ok(serde_wasm_bindgen::from_value(value)?);
    }

    let text = window
        .document()
        .and_then(|doc| doc.get_element_by_id(ROUNDS_SCRIPT_ID))
        .and_then(|el| el.text_content())
        .ok_or(DataError::Missing)?;
    parse_rounds(&text)
}

/// Parse the JSON body of the embedded data script.
pub fn parse_rounds(json: &str) -> Result<Vec<Round>, DataError> {
    if json.trim().is_empty() {
        return Err(DataError::Missing);
    }
    Ok(serde_json::from_str(json)?)
}

fn js_error(e: JsValue) -> DataError {
    DataError::Js(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rounds() {
        let json = r#"[
            {"id": 1, "year": 2020, "displayName": "Spring", "areResultsOfficial": true},
            {"id": "2", "year": 2019, "displayName": "Fall", "areResultsOfficial": false}
        ]"#;
        let rounds = parse_rounds(json).unwrap();
        assert_eq!(rounds.len(), 2);
        assert_eq!(rounds[0].id, "1");
        assert_eq!(rounds[1].display_name, "Fall");
    }

    #[test]
    fn test_parse_empty_body_is_missing() {
        assert!(matches!(parse_rounds("  \n "), Err(DataError::Missing)));
    }

    #[test]
    fn test_parse_malformed() {
        let err = parse_rounds(r#"[{"id": 1}]"#).unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
        assert!(String::from(err).starts_with("Round data is malformed"));
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_rounds("[]").unwrap().is_empty());
    }
}
