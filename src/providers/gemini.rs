use serde::{Deserialize, Serialize};
use log::{debug, trace, error};

// ===== Message Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part
{   pub text: String
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content
{   #[serde(default)]
    pub parts: Vec<Part>
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest
{   pub contents: Vec<Content>
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse
{   #[serde(default)]
    pub candidates: Vec<Candidate>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate
{   pub content: Content
}

impl GenerateContentRequest
{   pub fn from_prompt(prompt: &str) -> Self
    {   GenerateContentRequest
        {   contents: vec![
              Content
              {   parts: vec![Part { text: prompt.to_string() }]
              }
            ]
        }
    }
}

impl GenerateContentResponse
{   /// Text of the first part of the first candidate
    pub fn first_text(self) -> Option<String>
    {   self.candidates
          .into_iter()
          .next()?
          .content
          .parts
          .into_iter()
          .next()
          .map(|p| p.text)
    }
}

// ===== Gemini Client =====

/// Single-shot client for the generateContent endpoint.
/// One upstream request per call, no retries.
#[derive(Clone)]
pub struct GeminiClient
{   api_key: String
  , api_base: String
  , model: String
  , http_client: reqwest::Client
}

impl GeminiClient
{   pub fn new(
      api_key: String
    , config: &crate::config::ChefConfig
    ) -> Result<Self, crate::error::Error>
    {   debug!(
          "Creating GeminiClient for model {} with {}s timeout",
          config.model,
          config.timeout_secs
        );
        let http_client = reqwest::Client::builder()
          .timeout(config.timeout())
          .build()
          .map_err(|e| {
            crate::error::Error::InvalidConfiguration(e.to_string())
          })?;

        Ok(GeminiClient
        {   api_key
          , api_base: config.api_base.trim_end_matches('/').to_string()
          , model: config.model.clone()
          , http_client
        })
    }

    pub fn model(&self) -> &str
    {   &self.model
    }

    fn endpoint(&self) -> String
    {   format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    /// Send `prompt` and return the raw text of the first candidate.
    /// Dropping the returned future cancels the in-flight request.
    pub async fn call(&self, prompt: &str)
      -> Result<String, crate::error::Error>
    {   let request = GenerateContentRequest::from_prompt(prompt);
        trace!("Gemini request: {:?}", request);

        let response = self.http_client
          .post(self.endpoint())
          .query(&[("key", self.api_key.as_str())])
          .header("Content-Type", "application/json")
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            // the url carries the credential
            let e = e.without_url();
            error!("HTTP error calling Gemini: {}", e);
            crate::error::Error::from(e)
          })?;

        let status = response.status();
        trace!("Gemini response status: {}", status);

        if !status.is_success()
        {   let body = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("Gemini API error: {} - {}", status, body);
            return Err(crate::error::Error::ApiError
            {   status: status.as_u16()
              , body
            });
        }

        let envelope: GenerateContentResponse
          = response.json().await.map_err(|e| {
            let e = e.without_url();
            error!("Parse error: {}", e);
            if e.is_timeout()
            {   crate::error::Error::Timeout
            } else
            {   crate::error::Error::ParseError(e.to_string())
            }
          })?;

        envelope.first_text().ok_or_else(|| {
          error!("No candidates in Gemini response");
          crate::error::Error::NoCandidates
        })
    }
}

impl std::fmt::Debug for GeminiClient
{   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {   f.debug_struct("GeminiClient")
          .field("api_base", &self.api_base)
          .field("model", &self.model)
          .finish_non_exhaustive()
    }
}
