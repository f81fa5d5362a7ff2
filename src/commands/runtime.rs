use crate::api::{ClusterApi, HttpClusterApi};
use crate::cli::{Cli, Commands};
use crate::domain::constants::CHART_PATH;
use crate::domain::models::{ChartSource, LogReport, PatientRecord};
use crate::services::cache_bust::cache_busted;
use crate::services::config::Settings;
use crate::services::controller::{MapRefreshClient, Outcome};
use crate::services::output::print_one;
use crate::services::page::Page;
use serde::Serialize;

#[derive(Serialize)]
struct PageReport {
    outcome: Outcome,
    page: Page,
}

pub fn handle_runtime_commands(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    let api = HttpClusterApi::new(&settings.server, settings.timeout_ms)?;
    match &cli.command {
        Commands::Run => {
            let client = MapRefreshClient::new(api, Page::default(), &settings.server);
            let outcome = client.run_clustering();
            report_page(cli.json, outcome, client.into_page())?;
        }
        Commands::RunDate { date } => {
            let page = Page::with_date_filter(date.clone().unwrap_or_default());
            let client = MapRefreshClient::new(api, page, &settings.server);
            let outcome = client.run_clustering_for_date();
            report_page(cli.json, outcome, client.into_page())?;
        }
        Commands::RefreshMap { variant } => {
            let client = MapRefreshClient::new(api, Page::default(), &settings.server);
            client.refresh_map(*variant);
            report_page(cli.json, Outcome::Completed, client.into_page())?;
        }
        Commands::Log => {
            let output = api.script_output()?;
            let report = LogReport {
                server: settings.server.clone(),
                output,
            };
            print_one(cli.json, true, report, |r| r.output.clone())?;
        }
        Commands::Submit(args) => {
            let record = PatientRecord::from(args);
            let client = MapRefreshClient::new(api, Page::default(), &settings.server);
            let outcome = client.submit_record(&record);
            report_page(cli.json, outcome, client.into_page())?;
        }
        Commands::Chart { kind } => {
            let base = format!(
                "{}{}/{}",
                settings.server.trim_end_matches('/'),
                CHART_PATH,
                kind.as_str()
            );
            let chart = ChartSource {
                kind: *kind,
                src: cache_busted(&base, ""),
            };
            print_one(cli.json, true, chart, |c| c.src.clone())?;
        }
    }
    Ok(())
}

/// Prints the page, then turns an alert or transport failure into an error
/// so the process exits non-zero.
fn report_page(json: bool, outcome: Outcome, page: Page) -> anyhow::Result<()> {
    let failure = match outcome {
        Outcome::InputMissing => Some(page.alerts.join("; ")),
        Outcome::TransportFailure => Some(page.status.clone()),
        _ => None,
    };
    print_one(json, outcome.is_ok(), PageReport { outcome, page }, |r| {
        r.page.render_text()
    })?;
    match failure {
        Some(message) => anyhow::bail!(message),
        None => Ok(()),
    }
}
