use std::future::{ready, Ready};

use actix_web::{
    cookie::{time::Duration, Cookie},
    dev::Payload,
    Error, FromRequest, HttpRequest,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};

pub const FLASH_COOKIE: &str = "_flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Error,
    Success,
    Info,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Error => "error",
            FlashLevel::Success => "success",
            FlashLevel::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub text: String,
}

impl FlashMessage {
    pub fn new(level: FlashLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(FlashLevel::Error, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(FlashLevel::Success, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(FlashLevel::Info, text)
    }
}

/// Messages that survive exactly one redirect, carried in a cookie.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlashMessages(pub Vec<FlashMessage>);

impl FlashMessages {
    pub fn push(&mut self, message: FlashMessage) {
        self.0.push(message);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlashMessage> {
        self.0.iter()
    }

    pub fn encode(&self) -> String {
        let json = serde_json::to_vec(&self.0).unwrap_or_default();
        URL_SAFE_NO_PAD.encode(json)
    }

    /// Anything that doesn't decode cleanly is dropped.
    pub fn decode(value: &str) -> Self {
        URL_SAFE_NO_PAD
            .decode(value)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .map(FlashMessages)
            .unwrap_or_default()
    }

    pub fn cookie(&self) -> Cookie<'static> {
        Cookie::build(FLASH_COOKIE, self.encode())
            .path("/")
            .http_only(true)
            .finish()
    }

    pub fn removal_cookie() -> Cookie<'static> {
        Cookie::build(FLASH_COOKIE, "")
            .path("/")
            .http_only(true)
            .max_age(Duration::ZERO)
            .finish()
    }
}

impl FromRequest for FlashMessages {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let messages = req
            .cookie(FLASH_COOKIE)
            .map(|cookie| FlashMessages::decode(cookie.value()))
            .unwrap_or_default();

        ready(Ok(messages))
    }
}
