//! Turns raw upstream text into a [`GenerationResult`].
//!
//! Only three literal fences are recognized: a leading "```json", a leading
//! "```" and a trailing "```". Anything else (leading whitespace before the
//! fence, "```JSON", a newline after the closing fence) passes through
//! untouched and will usually end up on the degradation path.
//!
//! Keys are accepted in lower case, Capitalized or UPPER case
//! ("title", "Title", "TITLE"). Other mixed casings degrade.

use log::{debug, warn};
use crate::request::GenerationResult;

/// Remove literal code fences and surrounding whitespace
pub fn strip_fences(raw: &str) -> &str
{   let text = raw.strip_prefix("```json").unwrap_or(raw);
    let text = text.strip_prefix("```").unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}

/// Parse upstream output. Never fails: undecodable text becomes the content
/// of a result titled after the first ingredient.
pub fn interpret(raw: &str, ingredients: &[String]) -> GenerationResult
{   let cleaned = strip_fences(raw);
    match serde_json::from_str::<GenerationResult>(cleaned)
    {   Ok(result) => {
          debug!("Decoded upstream recipe: {}", result.title);
          result
        }
      , Err(e) => {
          warn!("Upstream output is not a recipe object ({}), degrading", e);
          degraded(cleaned, ingredients)
        }
    }
}

fn degraded(cleaned: &str, ingredients: &[String]) -> GenerationResult
{   let title = match ingredients.first()
    {   Some(first) => format!("Recipe with {}", first)
      , None => "Recipe".to_string()
    };
    GenerationResult
    {   title
      , content: cleaned.to_string()
      , calories: 0
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    fn ingredients(names: &[&str]) -> Vec<String>
    {   names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn well_formed_object_is_returned_verbatim()
    {   let result = interpret(
          r#"{"title":"T","content":"C","calories":5}"#,
          &ingredients(&["egg"])
        );
        assert_eq!(result, GenerationResult
        {   title: "T".to_string()
          , content: "C".to_string()
          , calories: 5
        });
    }

    #[test]
    fn plain_text_degrades()
    {   let result = interpret(
          "not json at all",
          &ingredients(&["egg", "milk"])
        );
        assert_eq!(result.title, "Recipe with egg");
        assert_eq!(result.content, "not json at all");
        assert_eq!(result.calories, 0);
    }

    #[test]
    fn json_fence_is_stripped()
    {   let fenced = "```json\n{\"title\":\"A\",\"content\":\"B\",\"calories\":1}\n```";
        let plain = r#"{"title":"A","content":"B","calories":1}"#;
        let ing = ingredients(&["egg"]);
        assert_eq!(interpret(fenced, &ing), interpret(plain, &ing));
        assert_eq!(interpret(fenced, &ing).title, "A");
    }

    #[test]
    fn bare_fence_is_stripped()
    {   let fenced = "```\n{\"title\":\"A\",\"content\":\"B\",\"calories\":1}\n```";
        assert_eq!(interpret(fenced, &ingredients(&["x"])).calories, 1);
    }

    #[test]
    fn indented_fence_is_not_recognized()
    {   let raw = "  ```json\n{\"title\":\"A\",\"content\":\"B\",\"calories\":1}\n```";
        let result = interpret(raw, &ingredients(&["egg"]));
        assert_eq!(result.title, "Recipe with egg");
        assert!(result.content.starts_with("```json"));
    }

    #[test]
    fn missing_fields_degrade()
    {   let result = interpret(
          r#"{"title":"Only a title"}"#,
          &ingredients(&["rice"])
        );
        assert_eq!(result.title, "Recipe with rice");
        assert_eq!(result.calories, 0);
    }

    #[test]
    fn empty_text_still_yields_a_title()
    {   let result = interpret("", &ingredients(&["egg"]));
        assert_eq!(result.title, "Recipe with egg");
        assert_eq!(result.content, "");

        let result = interpret("", &[]);
        assert_eq!(result.title, "Recipe");
    }

    #[test]
    fn capitalized_keys_decode()
    {   let result = interpret(
          r#"{"Title":"T","Content":"C","Calories":7}"#,
          &ingredients(&["egg"])
        );
        assert_eq!(result, GenerationResult
        {   title: "T".to_string()
          , content: "C".to_string()
          , calories: 7
        });

        let result = interpret(
          r#"{"TITLE":"T","CONTENT":"C","CALORIES":7}"#,
          &ingredients(&["egg"])
        );
        assert_eq!(result.calories, 7);
    }

    #[test]
    fn negative_calories_degrade()
    {   let result = interpret(
          r#"{"title":"T","content":"C","calories":-3}"#,
          &ingredients(&["egg"])
        );
        assert_eq!(result.title, "Recipe with egg");
    }
}
