use std::fmt;

/// Generic message shown to clients for any non-validation failure
pub const GENERIC_FAILURE: &str = "failed to generate recipe";

/// Custom error type for fridgechef operations
/// Implements Clone so results can be shared between tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Request rejected before any external call
    Validation(String)
  , /// Inventory collaborator failed to list items
    Inventory(String)
  , /// HTTP transport error
    HttpError(String)
  , /// Upstream returned a non-2xx status
    ApiError
    {   status: u16
      , body: String
    }
  , /// Failed to decode the upstream envelope
    ParseError(String)
  , /// Upstream response carried no candidate text
    NoCandidates
  , /// Upstream call exceeded the client timeout
    Timeout
  , /// Upstream failure surfaced by the orchestrator
    Upstream(Box<Error>)
  , /// Invalid configuration
    InvalidConfiguration(String)
  , /// Generic error
    Other(String)
}

impl Error
{   /// Message safe to hand back to a client.
    /// Validation errors are shown verbatim; anything else is opaque.
    pub fn user_message(&self) -> String
    {   match self
        {   Error::Validation(msg) => msg.clone()
          , _ => GENERIC_FAILURE.to_string()
        }
    }

    pub fn is_validation(&self) -> bool
    {   matches!(self, Error::Validation(_))
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::Validation(msg) => {
              write!(f, "Validation error: {}", msg)
            }
          , Error::Inventory(msg) => {
              write!(f, "Inventory error: {}", msg)
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ApiError { status, body } => {
              write!(f, "API error: {} - {}", status, body)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::NoCandidates => {
              write!(f, "no content returned from upstream")
            }
          , Error::Timeout => {
              write!(f, "Request timed out")
            }
          , Error::Upstream(inner) => {
              write!(f, "Recipe generation failed: {}", inner)
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
          , Error::Other(msg) => {
              write!(f, "Error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error
{   fn source(&self)
      -> Option<&(dyn std::error::Error + 'static)>
    {   match self
        {   Error::Upstream(inner) => Some(inner.as_ref())
          , _ => None
        }
    }
}

impl From<String> for Error
{   fn from(s: String) -> Self
    {   Error::Other(s)
    }
}

impl From<&str> for Error
{   fn from(s: &str) -> Self
    {   Error::Other(s.to_string())
    }
}

impl From<reqwest::Error> for Error
{   fn from(e: reqwest::Error) -> Self
    {   if e.is_timeout()
        {   Error::Timeout
        } else
        {   Error::HttpError(e.to_string())
        }
    }
}
