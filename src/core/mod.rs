pub mod config;
pub mod context;
pub mod error;
pub mod types;

pub use config::{ActionLayout, HudSettings, SpellPreparation};
pub use context::{HudContext, Translations, UserContext};
pub use error::{HudError, Result};
