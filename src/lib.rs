pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod inventory;
pub mod prompt;
pub mod interpret;
pub mod filter;
pub mod registration;
pub mod client;

/*

fridgechef: the recipe-generation core of a pantry app.
Ingredients plus the user's pantry go into one prompt, one call
to the upstream model, and one tolerant parse of whatever comes
back. Without a credential the offline generator answers instead.

fridgechef/
├── Cargo.toml
├── src/
│   ├── lib.rs            # Re-exports
│   ├── error.rs          # Crate error type
│   ├── config.rs         # ChefConfig, env loading
│   ├── request.rs        # GenerationRequest / GenerationResult
│   ├── inventory.rs      # InventorySource collaborator
│   ├── prompt.rs         # Prompt composition
│   ├── providers/
│   │   ├── mod.rs
│   │   └── gemini.rs     # Upstream client
│   ├── interpret.rs      # Tolerant response parsing
│   ├── filter.rs         # ContentGate
│   ├── registration.rs   # Username screening
│   ├── client.rs         # RecipeOrchestrator
│   └── bin/fridgechef.rs # CLI
└── tests/

*/

pub use client::{Generator, LiveGenerator, OfflineGenerator, RecipeOrchestrator};
pub use config::ChefConfig;
pub use error::Error;
pub use filter::ContentGate;
pub use inventory::{EmptyInventory, InventoryItem, InventorySource, MemoryInventory};
pub use request::{GenerationRequest, GenerationResult, Language};
