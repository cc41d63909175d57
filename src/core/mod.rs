mod codec;
mod engine;
mod format;
mod store;
mod types;

pub use codec::{SharedScenario, TokenError, decode_share_token, encode_share_token};
pub use engine::project;
pub use format::{format_currency, format_percent, palette_color};
pub use store::ScenarioStore;
pub use types::{Scenario, ScenarioInputs, YearlyPoint};
