mod app;
mod error;
mod nws;
mod presenter;
mod states;
mod types;
mod workflow;

pub use app::{run, Outcome};
pub use error::ZonecastError;

pub use nws::client::NwsClient;
pub use nws::error::NwsError;

pub use presenter::render;

pub use types::forecast::{Forecast, ForecastEntry, ForecastKind};
pub use types::selection::Selection;
pub use types::station::{LatLon, Station};
pub use types::zone::{Zone, ZoneCatalog};

pub use workflow::error::SelectionError;
pub use workflow::flow::SelectionFlow;
pub use workflow::prompt::{ConsolePrompter, Prompter};
