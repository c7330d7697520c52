//! Request and result types for recipe generation

use serde::{Deserialize, Serialize};

/// Output language of a generated recipe.
/// Unknown codes fall back to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language
{   #[default]
    English
  , Portuguese
}

impl Language
{   pub fn from_code(code: &str) -> Self
    {   match code
        {   "pt" => Language::Portuguese
          , _ => Language::English
        }
    }

    pub fn code(&self) -> &'static str
    {   match self
        {   Language::English => "en"
          , Language::Portuguese => "pt"
        }
    }
}

impl From<String> for Language
{   fn from(code: String) -> Self
    {   Language::from_code(&code)
    }
}

impl From<Language> for String
{   fn from(lang: Language) -> Self
    {   lang.code().to_string()
    }
}

/// Inbound generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest
{   /// Ingredient names, in the caller's order
    pub ingredients: Vec<String>
  , /// Free-text preferences
    #[serde(default)]
    pub preferences: String
  , /// Output language
    #[serde(default)]
    pub language: Language
}

impl GenerationRequest
{   pub fn new<I, S>(ingredients: I) -> Self
    where I: IntoIterator<Item = S>
        , S: Into<String>
    {   GenerationRequest
        {   ingredients: ingredients.into_iter().map(Into::into).collect()
          , preferences: String::new()
          , language: Language::default()
        }
    }

    pub fn with_preferences(mut self, preferences: impl Into<String>) -> Self
    {   self.preferences = preferences.into();
        self
    }

    pub fn with_language(mut self, language: Language) -> Self
    {   self.language = language;
        self
    }

    /// Reject requests that must never reach the generator
    pub fn validate(&self) -> Result<(), crate::error::Error>
    {   if self.ingredients.is_empty()
        {   return Err(crate::error::Error::Validation(
              "ingredients are required".to_string()
            ));
        }
        Ok(())
    }
}

/// Generated recipe handed back to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult
{   #[serde(alias = "Title", alias = "TITLE")]
    pub title: String
  , /// Markdown body
    #[serde(alias = "Content", alias = "CONTENT")]
    pub content: String
  , /// Calorie estimate, 0 when unknown
    #[serde(alias = "Calories", alias = "CALORIES")]
    pub calories: u32
}
