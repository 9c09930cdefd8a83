#![allow(clippy::future_not_send)]

use shared::{RegistrationData, TransportError};
use std::{
    error::Error,
    fmt::{self, Debug, Display, Formatter},
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Something wrong has occurred while sending a request.
#[derive(Debug)]
pub enum FetchError {
    JsError(JsValue),
    SerdeError(serde_json::error::Error),
}
impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::JsError(e) => Debug::fmt(e, f),
            Self::SerdeError(e) => Display::fmt(e, f),
        }
    }
}
impl Error for FetchError {}

impl From<JsValue> for FetchError {
    fn from(v: JsValue) -> Self {
        Self::JsError(v)
    }
}
impl From<serde_json::error::Error> for FetchError {
    fn from(v: serde_json::error::Error) -> Self {
        Self::SerdeError(v)
    }
}

impl From<FetchError> for TransportError {
    fn from(e: FetchError) -> Self {
        Self::new(e.to_string())
    }
}

/// Posts the registration and returns the response status code. The body of
/// the response is not read.
pub async fn submit_registration(url: &str, data: &RegistrationData) -> Result<u16, FetchError> {
    let body = serde_json::to_string(data)?;
    let body = JsValue::from_str(&body);

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&body);

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = gloo_utils::window();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    Ok(resp.status())
}
