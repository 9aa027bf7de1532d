pub mod cli;
pub mod config;
pub mod parser;
pub mod schema;
pub mod ui;
pub mod writer;

pub use cli::Cli;
pub use config::{Credentials, InsertMode, LoadOptions};
pub use ui::{LogUi, Phase, SilentUi, Ui};
pub use writer::{load_csv, LoadSummary};
