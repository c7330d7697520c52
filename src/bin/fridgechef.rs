use std::process::ExitCode;
use std::sync::Arc;
use clap::{Parser, Subcommand};
use log::error;
use uuid::Uuid;
use fridgechef::{
  ChefConfig, ContentGate, EmptyInventory, GenerationRequest,
  Language, RecipeOrchestrator,
};

#[derive(Debug, Parser)]
#[command(name = "fridgechef", about = "Generate recipes from what is in the fridge")]
struct Cli
{   #[command(subcommand)]
    command: Command
}

#[derive(Debug, Subcommand)]
enum Command
{   /// Generate a recipe and print it as JSON
    Generate
    {   /// Ingredients, in the order they should be listed
        #[arg(required = true)]
        ingredients: Vec<String>
      , /// Free-text preferences
        #[arg(long, default_value = "")]
        prefs: String
      , /// Language code (`pt` for Portuguese, anything else is English)
        #[arg(long, default_value = "en")]
        lang: String
    }
  , /// Check a username against the content gate
    CheckUsername
    {   username: String
    }
}

async fn run(cli: Cli) -> Result<(), fridgechef::Error>
{   match cli.command
    {   Command::Generate { ingredients, prefs, lang } => {
          let config = ChefConfig::from_env()?;
          let orchestrator = RecipeOrchestrator::from_config(
            &config,
            Arc::new(EmptyInventory)
          )?;
          let request = GenerationRequest::new(ingredients)
            .with_preferences(prefs)
            .with_language(Language::from_code(&lang));
          let result = orchestrator
            .generate(&Uuid::new_v4(), &request)
            .await?;
          let json = serde_json::to_string_pretty(&result)
            .map_err(|e| fridgechef::Error::Other(e.to_string()))?;
          println!("{}", json);
          Ok(())
        }
      , Command::CheckUsername { username } => {
          let gate = ContentGate::new()?;
          fridgechef::registration::check_username(&gate, &username)?;
          println!("ok");
          Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode
{   env_logger::init();
    let cli = Cli::parse();
    match run(cli).await
    {   Ok(()) => ExitCode::SUCCESS
      , Err(e) => {
          error!("{}", e);
          eprintln!("{}", e.user_message());
          ExitCode::FAILURE
        }
    }
}
