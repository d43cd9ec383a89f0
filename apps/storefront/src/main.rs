//! # FoodieHub Storefront Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        FoodieHub Storefront                             │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rendering layer (parent process)              │  │
//! │  │  • Menu grid            • Cart panel                             │  │
//! │  │  • Auth prompt          • Theme switch                           │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                     JSON lines over stdin/stdout                        │
//! │  ┌──────────────────────────────▼───────────────────────────────────┐  │
//! │  │                    This binary                                   │  │
//! │  │  main.rs ────► starts the runtime, reports fatal startup errors  │  │
//! │  │  lib.rs ─────► config, logging, state, intent loop               │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    TheMealDB (HTTP)                              │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

#[tokio::main]
async fn main() {
    // The actual setup is in lib.rs for better testability
    if let Err(e) = foodie_storefront::run().await {
        eprintln!("foodie-storefront: {}", e);
        std::process::exit(1);
    }
}
