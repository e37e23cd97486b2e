use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use quiz_core::model::{AnswerOption, OptionId, Question, QuestionId};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::error::QuestionSourceError;
use crate::question_source::QuestionSource;

#[derive(Clone, Debug)]
pub struct HttpSourceConfig {
    pub base_url: String,
    pub auth_token: Option<SecretString>,
    pub timeout: Duration,
}

impl HttpSourceConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: None,
            timeout: Duration::from_secs(10),
        }
    }

    #[must_use]
    pub fn questions_url(&self) -> String {
        format!("{}/questions", self.base_url.trim_end_matches('/'))
    }
}

/// Fetches the question list from the quiz REST API.
#[derive(Clone)]
pub struct HttpQuestionSource {
    client: Client,
    config: HttpSourceConfig,
}

impl HttpQuestionSource {
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the HTTP client cannot be built.
    pub fn new(config: HttpSourceConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    async fn list_questions(&self) -> Result<Vec<Question>, QuestionSourceError> {
        let url = self.config.questions_url();
        let mut request = self.client.get(&url);
        if let Some(token) = self.config.auth_token.as_ref() {
            request = request.bearer_auth(token.expose_secret());
        }

        tracing::debug!(%url, "fetching questions");
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(QuestionSourceError::HttpStatus(response.status()));
        }

        let body = response.bytes().await?;
        decode_questions(&body)
    }
}

#[derive(Debug, Deserialize)]
struct WrappedPayload {
    questions: Vec<QuestionDto>,
}

#[derive(Debug, Deserialize)]
struct QuestionDto {
    #[serde(default)]
    id: Option<u64>,
    title: String,
    #[serde(default)]
    options: Vec<OptionDto>,
}

#[derive(Debug, Deserialize)]
struct OptionDto {
    id: u64,
    #[serde(default, alias = "content", alias = "text")]
    label: String,
}

impl OptionDto {
    fn into_option(self) -> AnswerOption {
        let id = OptionId::new(self.id);
        if self.label.trim().is_empty() {
            return AnswerOption::new(id, format!("Option {id}"));
        }
        AnswerOption::new(id, self.label)
    }
}

/// Parse either a bare array or `{ "questions": [...] }`, keeping serde's own
/// error message for whichever shape the body has.
fn parse_payload(body: &[u8]) -> Result<Vec<QuestionDto>, serde_json::Error> {
    let is_object = body.iter().find(|byte| !byte.is_ascii_whitespace()) == Some(&b'{');
    if is_object {
        Ok(serde_json::from_slice::<WrappedPayload>(body)?.questions)
    } else {
        serde_json::from_slice(body)
    }
}

/// Decode a question payload.
///
/// Option ids are non-negative integers. Options without a label show their
/// id. Questions without an `id` are numbered after the largest explicit id;
/// explicit ids must be unique.
pub(crate) fn decode_questions(body: &[u8]) -> Result<Vec<Question>, QuestionSourceError> {
    let dtos = parse_payload(body)?;

    let mut next_id = dtos.iter().filter_map(|dto| dto.id).max().unwrap_or(0);
    let mut seen = HashSet::with_capacity(dtos.len());
    let mut questions = Vec::with_capacity(dtos.len());
    for dto in dtos {
        let id = match dto.id {
            Some(id) => QuestionId::new(id),
            None => {
                next_id = next_id.saturating_add(1);
                QuestionId::new(next_id)
            }
        };
        if !seen.insert(id) {
            return Err(QuestionSourceError::DuplicateQuestion(id));
        }
        let options = dto.options.into_iter().map(OptionDto::into_option).collect();
        questions.push(Question::new(id, dto.title, options)?);
    }
    Ok(questions)
}
