//! Minimal typed client for the Telegram Bot API.
//!
//! Raw `reqwest` against `https://api.telegram.org/bot<token>` — only the
//! handful of methods the bot needs. The base URL is injectable so tests can
//! point the client at a local mock server.

use std::time::Duration;

use anyhow::{bail, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Long-poll window requested from `getUpdates`, in seconds.
const POLL_TIMEOUT_SECS: u64 = 25;

/// HTTP timeout; must exceed the long-poll window.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(35);

#[derive(Clone)]
pub struct BotApi {
    client: Client,
    base_url: String,
}

impl BotApi {
    /// Creates a client for the production Bot API.
    ///
    /// # Errors
    ///
    /// Fails only if the underlying HTTP client cannot be constructed.
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(format!("https://api.telegram.org/bot{token}"))
    }

    /// Creates a client against an arbitrary base URL (tests point this at a
    /// mock server).
    ///
    /// # Errors
    ///
    /// Fails only if the underlying HTTP client cannot be constructed.
    pub fn with_base_url(base_url: String) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, base_url })
    }

    /// Fetches pending updates after `offset`, long-polling the API.
    ///
    /// # Errors
    ///
    /// HTTP/transport failures and API-level `ok: false` responses.
    pub async fn get_updates(&self, offset: i64) -> Result<Vec<Update>> {
        let url = format!("{}/getUpdates", self.base_url);
        let response = self
            .client
            .get(url)
            .query(&[
                ("timeout", POLL_TIMEOUT_SECS.to_string()),
                ("offset", offset.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let payload: TelegramResponse<Vec<Update>> = response.json().await?;
        payload.into_result("getUpdates")
    }

    /// Sends an HTML-formatted text message, returning its message id so the
    /// caller can edit it later.
    ///
    /// # Errors
    ///
    /// HTTP/transport failures and API-level `ok: false` responses.
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_markup: Option<&InlineKeyboardMarkup>,
    ) -> Result<i64> {
        let url = format!("{}/sendMessage", self.base_url);
        let body = SendMessageRequest {
            chat_id,
            text,
            parse_mode: "HTML",
            disable_web_page_preview: true,
            reply_markup,
        };
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: TelegramResponse<Message> = response.json().await?;
        Ok(payload.into_result("sendMessage")?.message_id)
    }

    /// Replaces the text (and keyboard) of a previously-sent message.
    ///
    /// # Errors
    ///
    /// HTTP/transport failures and API-level `ok: false` responses.
    pub async fn edit_message_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        reply_markup: Option<&InlineKeyboardMarkup>,
    ) -> Result<()> {
        let url = format!("{}/editMessageText", self.base_url);
        let body = EditMessageRequest {
            chat_id,
            message_id,
            text,
            parse_mode: "HTML",
            reply_markup,
        };
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: TelegramResponse<serde_json::Value> = response.json().await?;
        payload.into_result("editMessageText").map(|_| ())
    }

    /// Sends a photo by URL with an HTML caption.
    ///
    /// # Errors
    ///
    /// HTTP/transport failures and API-level `ok: false` responses — the
    /// caller falls back to a plain text message when the photo URL is
    /// rejected.
    pub async fn send_photo(
        &self,
        chat_id: i64,
        photo_url: &str,
        caption: &str,
        reply_markup: Option<&InlineKeyboardMarkup>,
    ) -> Result<()> {
        let url = format!("{}/sendPhoto", self.base_url);
        let body = SendPhotoRequest {
            chat_id,
            photo: photo_url,
            caption,
            parse_mode: "HTML",
            reply_markup,
        };
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: TelegramResponse<serde_json::Value> = response.json().await?;
        payload.into_result("sendPhoto").map(|_| ())
    }
}

#[derive(Debug, Deserialize)]
struct TelegramResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

impl<T> TelegramResponse<T> {
    fn into_result(self, method: &str) -> Result<T> {
        if !self.ok {
            let description = self
                .description
                .unwrap_or_else(|| format!("telegram {method} failed"));
            bail!(description);
        }
        match self.result {
            Some(result) => Ok(result),
            None => bail!("telegram {method} returned ok without a result"),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: i64,
    text: &'a str,
    parse_mode: &'a str,
    disable_web_page_preview: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<&'a InlineKeyboardMarkup>,
}

#[derive(Debug, Serialize)]
struct EditMessageRequest<'a> {
    chat_id: i64,
    message_id: i64,
    text: &'a str,
    parse_mode: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<&'a InlineKeyboardMarkup>,
}

#[derive(Debug, Serialize)]
struct SendPhotoRequest<'a> {
    chat_id: i64,
    photo: &'a str,
    caption: &'a str,
    parse_mode: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<&'a InlineKeyboardMarkup>,
}
