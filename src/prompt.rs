//! Prompt construction for the upstream generator

use crate::inventory::InventoryItem;
use crate::request::{GenerationRequest, Language};

const ENGLISH_DIRECTIVE: &str = "Respond in English.";
const PORTUGUESE_DIRECTIVE: &str = "Respond in Portuguese (pt-BR).";

/// Output contract requested from the upstream service.
/// Compliance is not guaranteed; see `crate::interpret`.
const OUTPUT_CONTRACT: &str = r#"Return ONLY a JSON object (no markdown formatting) with this structure:
{
	"title": "Recipe Title",
	"content": "Markdown formatted content with Ingredients and Instructions",
	"calories": 500
}
"#;

pub fn language_directive(language: Language) -> &'static str
{   match language
    {   Language::Portuguese => PORTUGUESE_DIRECTIVE
      , Language::English => ENGLISH_DIRECTIVE
    }
}

/// Sentence listing pantry items, empty when there are none
pub fn inventory_sentence(inventory: &[InventoryItem]) -> String
{   if inventory.is_empty()
    {   return String::new();
    }
    let names: Vec<&str> = inventory
      .iter()
      .map(|item| item.name.as_str())
      .collect();
    format!(
      "The user also has these items in their pantry (use them if needed): {}.",
      names.join(", ")
    )
}

/// Build the full prompt. Deterministic for a given request and snapshot.
pub fn compose_prompt(
  request: &GenerationRequest
, inventory: &[InventoryItem]
) -> String
{   format!(
      "\nYou are a professional chef. Create a recipe using these main ingredients: {}.\n{}\nPreferences: {}.\n{}\n{}",
      request.ingredients.join(", "),
      inventory_sentence(inventory),
      request.preferences,
      language_directive(request.language),
      OUTPUT_CONTRACT
    )
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn ingredients_keep_request_order()
    {   let req = GenerationRequest::new(["tomato", "basil", "garlic"]);
        let prompt = compose_prompt(&req, &[]);
        assert!(prompt.contains(
          "main ingredients: tomato, basil, garlic."
        ));
    }

    #[test]
    fn inventory_sentence_only_when_present()
    {   let req = GenerationRequest::new(["egg"]);
        let without = compose_prompt(&req, &[]);
        assert!(!without.contains("pantry"));

        let pantry = vec![
          InventoryItem::new("flour", "1kg"),
          InventoryItem::new("butter", "200g"),
        ];
        let with = compose_prompt(&req, &pantry);
        assert!(with.contains(
          "in their pantry (use them if needed): flour, butter."
        ));
    }

    #[test]
    fn segments_appear_in_fixed_order()
    {   let req = GenerationRequest::new(["egg"])
          .with_preferences("vegetarian");
        let pantry = vec![InventoryItem::new("milk", "")];
        let prompt = compose_prompt(&req, &pantry);

        let role = prompt.find("professional chef").unwrap();
        let pantry_at = prompt.find("pantry").unwrap();
        let prefs = prompt.find("Preferences: vegetarian.").unwrap();
        let lang = prompt.find(ENGLISH_DIRECTIVE).unwrap();
        let contract = prompt.find("Return ONLY a JSON object").unwrap();
        assert!(role < pantry_at);
        assert!(pantry_at < prefs);
        assert!(prefs < lang);
        assert!(lang < contract);
    }

    #[test]
    fn empty_preferences_render_empty_clause()
    {   let prompt = compose_prompt(&GenerationRequest::new(["egg"]), &[]);
        assert!(prompt.contains("Preferences: ."));
    }

    #[test]
    fn portuguese_directive_selected_by_language()
    {   let req = GenerationRequest::new(["ovo"])
          .with_language(Language::Portuguese);
        let prompt = compose_prompt(&req, &[]);
        assert!(prompt.contains(PORTUGUESE_DIRECTIVE));
        assert!(!prompt.contains(ENGLISH_DIRECTIVE));
    }

    #[test]
    fn composition_is_deterministic()
    {   let req = GenerationRequest::new(["egg", "milk"]);
        let pantry = vec![InventoryItem::new("salt", "")];
        assert_eq!(
          compose_prompt(&req, &pantry),
          compose_prompt(&req, &pantry)
        );
    }
}
