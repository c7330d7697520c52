use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;
use log::{debug, info, warn, error};
use crate::inventory::{InventoryItem, InventorySource};
use crate::request::{GenerationRequest, GenerationResult};

/// Calories reported by the offline generator
pub const OFFLINE_CALORIES: u32 = 450;

/// Deterministic generator used when no upstream credential is configured
#[derive(Debug, Clone)]
pub struct OfflineGenerator
{   /// Simulated upstream latency, zero to disable
    pub delay: Duration
}

impl OfflineGenerator
{   pub fn new(delay: Duration) -> Self
    {   OfflineGenerator { delay }
    }

    pub async fn generate(&self, request: &GenerationRequest)
      -> GenerationResult
    {   if !self.delay.is_zero()
        {   debug!("Offline generator sleeping {:?}", self.delay);
            tokio::time::sleep(self.delay).await;
        }
        offline_recipe(request)
    }
}

impl Default for OfflineGenerator
{   fn default() -> Self
    {   OfflineGenerator::new(Duration::from_millis(
          crate::config::DEFAULT_OFFLINE_DELAY_MS
        ))
    }
}

/// Build the offline recipe without any delay
pub fn offline_recipe(request: &GenerationRequest) -> GenerationResult
{   let joined = request.ingredients.join(", ");
    let title = if request.preferences.is_empty()
    {   format!("Delicious Dish with {}", joined)
    } else
    {   format!("Delicious {} with {}", request.preferences, joined)
    };

    let bullets: String = request.ingredients
      .iter()
      .map(|ing| format!("- {}\n", ing))
      .collect();

    let content = format!(
      "\n# {}\n\n## Ingredients\n{}\n## Instructions\n\
       1. Prepare the ingredients.\n\
       2. Mix them together.\n\
       3. Cook for 20 minutes.\n\
       4. Serve hot.\n\
       \nEnjoy your meal!\n",
      title,
      bullets
    );

    GenerationResult
    {   title
      , content
      , calories: OFFLINE_CALORIES
    }
}

/// Generator backed by the upstream service and the user's pantry
#[derive(Clone)]
pub struct LiveGenerator
{   client: crate::providers::GeminiClient
  , inventory: Arc<dyn InventorySource>
}

impl LiveGenerator
{   pub fn new(
      client: crate::providers::GeminiClient
    , inventory: Arc<dyn InventorySource>
    ) -> Self
    {   LiveGenerator { client, inventory }
    }

    /// Pantry items, or nothing if the source fails
    async fn inventory_snapshot(&self, user: &Uuid) -> Vec<InventoryItem>
    {   match self.inventory.list(user).await
        {   Ok(items) => items
          , Err(e) => {
              warn!("Ignoring inventory failure for {}: {}", user, e);
              vec![]
            }
        }
    }

    pub async fn generate(
      &self
    , user: &Uuid
    , request: &GenerationRequest
    ) -> Result<GenerationResult, crate::error::Error>
    {   let inventory = self.inventory_snapshot(user).await;
        let prompt = crate::prompt::compose_prompt(request, &inventory);
        debug!(
          "Calling {} with {} ingredients and {} pantry items",
          self.client.model(),
          request.ingredients.len(),
          inventory.len()
        );

        let raw = self.client.call(&prompt).await.map_err(|e| {
          error!("Upstream generation failed: {}", e);
          crate::error::Error::Upstream(Box::new(e))
        })?;

        Ok(crate::interpret::interpret(&raw, &request.ingredients))
    }
}

impl std::fmt::Debug for LiveGenerator
{   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {   f.debug_struct("LiveGenerator")
          .field("model", &self.client.model())
          .finish_non_exhaustive()
    }
}

/// Generation strategy, fixed for the lifetime of an orchestrator
#[derive(Debug, Clone)]
pub enum Generator
{   Offline(OfflineGenerator)
  , Live(LiveGenerator)
}

/// Entry point for recipe generation
#[derive(Debug, Clone)]
pub struct RecipeOrchestrator
{   generator: Generator
}

impl RecipeOrchestrator
{   pub fn new(generator: Generator) -> Self
    {   RecipeOrchestrator { generator }
    }

    /// Pick the strategy from `config`: live when a credential is set,
    /// offline otherwise. Evaluated once.
    pub fn from_config(
      config: &crate::config::ChefConfig
    , inventory: Arc<dyn InventorySource>
    ) -> Result<Self, crate::error::Error>
    {   let generator = match config.credential()
        {   Some(key) => {
              info!("Using live generator ({})", config.model);
              let client = crate::providers::GeminiClient::new(
                key.to_string(),
                config
              )?;
              Generator::Live(LiveGenerator::new(client, inventory))
            }
          , None => {
              info!("No upstream credential, using offline generator");
              Generator::Offline(OfflineGenerator::new(
                config.offline_delay()
              ))
            }
        };
        Ok(RecipeOrchestrator::new(generator))
    }

    pub fn generator(&self) -> &Generator
    {   &self.generator
    }

    pub fn is_offline(&self) -> bool
    {   matches!(self.generator, Generator::Offline(_))
    }

    /// Generate a recipe for `user`.
    /// Upstream failures come back as `Error::Upstream`; unparseable
    /// upstream text does not fail.
    pub async fn generate(
      &self
    , user: &Uuid
    , request: &GenerationRequest
    ) -> Result<GenerationResult, crate::error::Error>
    {   request.validate()?;
        match &self.generator
        {   Generator::Offline(offline) => {
              Ok(offline.generate(request).await)
            }
          , Generator::Live(live) => {
              live.generate(user, request).await
            }
        }
    }
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn offline_title_uses_preferences()
    {   let req = GenerationRequest::new(["egg", "milk"])
          .with_preferences("vegan");
        assert_eq!(offline_recipe(&req).title, "Delicious vegan with egg, milk");
    }

    #[test]
    fn offline_title_falls_back_without_preferences()
    {   let req = GenerationRequest::new(["egg", "milk"]);
        assert_eq!(
          offline_recipe(&req).title,
          "Delicious Dish with egg, milk"
        );
    }

    #[test]
    fn offline_content_sections()
    {   let req = GenerationRequest::new(["rice", "beans"]);
        let content = offline_recipe(&req).content;
        assert!(content.contains("## Ingredients\n- rice\n- beans\n"));
        assert!(content.contains("## Instructions\n1. Prepare the ingredients."));
        assert!(content.contains("4. Serve hot."));
        assert!(content.trim_end().ends_with("Enjoy your meal!"));
    }
}
