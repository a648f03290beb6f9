//! The whole-app loop: selecting state, zone, kind and possibly a station,
//! fetching the forecast chain, rendering, then starting over.
//!
//! Fetch and selection failures are reported to the output and the loop
//! restarts at state selection without rendering anything partial. The loop
//! ends when the user backs out of a picker (a quit) or when the
//! cancellation token fires (a forced shutdown); the two are distinguished
//! in [`Outcome`] so the binary can exit with different status codes.

use crate::error::ZonecastError;
use crate::nws::client::NwsClient;
use crate::presenter::render;
use crate::types::forecast::ForecastKind;
use crate::types::selection::Selection;
use crate::types::zone::ZoneCatalog;
use crate::workflow::error::SelectionError;
use crate::workflow::flow::SelectionFlow;
use crate::workflow::prompt::Prompter;
use log::{error, info};
use std::io::Write;
use tokio_util::sync::CancellationToken;

/// Why the app loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user backed out of a picker.
    Quit,
    /// The cancellation signal fired.
    Cancelled,
}

/// Runs selection cycles until the user quits or the token is cancelled.
///
/// The zone catalog is fetched once up front; that fetch failing is the only
/// error this function returns, since nothing can be selected without it.
/// Every later error is written to `out` and the loop restarts from state
/// selection.
pub async fn run(
    client: &NwsClient,
    prompter: &mut (impl Prompter + Send),
    out: &mut (impl Write + Send),
    cancel: CancellationToken,
) -> Result<Outcome, ZonecastError> {
    let catalog = client.zone_catalog().await?;
    info!("loaded {} land zones", catalog.len());

    loop {
        if cancel.is_cancelled() {
            return Ok(Outcome::Cancelled);
        }
        let result = tokio::select! {
            _ = cancel.cancelled() => return Ok(Outcome::Cancelled),
            result = cycle(client, prompter, &catalog, out) => result,
        };
        match result {
            Ok(()) => {}
            Err(ZonecastError::Selection(SelectionError::Cancelled)) => {
                return Ok(Outcome::Quit);
            }
            Err(err @ ZonecastError::Render(_)) => return Err(err),
            Err(err) => {
                error!("forecast request failed: {err:?}");
                writeln!(out, "An error occurred: {err}")?;
            }
        }
    }
}

/// One pass of the state machine: selections, fetch chain, render.
async fn cycle(
    client: &NwsClient,
    prompter: &mut (impl Prompter + Send),
    catalog: &ZoneCatalog,
    out: &mut (impl Write + Send),
) -> Result<(), ZonecastError> {
    let mut flow = SelectionFlow::new(prompter);
    let state = flow.choose_state(catalog)?;
    let zone = flow.choose_zone(catalog, &state)?;
    let kind = flow.choose_kind()?;

    let (selection, forecast) = match kind {
        ForecastKind::Daily => {
            let forecast = client.zone_forecast(&zone).await?;
            let selection = Selection {
                state,
                zone: zone.id,
                kind,
                station: None,
            };
            (selection, forecast)
        }
        ForecastKind::Hourly => {
            let stations = client.zone_stations(&zone).await?;
            let station = flow.choose_station(&zone.id, &stations)?;
            let coordinate = client.station_coordinate(&station).await?;
            let hourly_url = client.hourly_forecast_url(coordinate).await?;
            let forecast = client.hourly_forecast(&hourly_url).await?;
            let selection = Selection {
                state,
                zone: zone.id,
                kind,
                station: Some(station),
            };
            (selection, forecast)
        }
    };

    info!(
        "rendering {} {} entries for zone {}",
        forecast.len(),
        selection.kind,
        selection.zone
    );
    render(out, &selection.title(), &forecast)?;
    Ok(())
}
