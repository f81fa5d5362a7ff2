use crate::domain::models::{ChartKind, MapVariant, PatientRecord};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "geoepi", version, about = "GeoEpi clustering client")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Base URL of the clustering service (overrides config.toml)"
    )]
    pub server: Option<String>,
    #[arg(long, global = true, help = "Per-request timeout in milliseconds")]
    pub timeout_ms: Option<u64>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run DBSCAN over the whole dataset and refresh the general map
    Run,
    /// Run DBSCAN around a reference date and refresh the date map
    RunDate {
        /// Reference date (YYYY-MM-DD); left empty, nothing is sent
        date: Option<String>,
    },
    /// Produce a fresh cache-busted source for a map image
    RefreshMap {
        #[arg(value_enum)]
        variant: MapVariant,
    },
    /// Print the output of the last clustering script run
    Log,
    /// Submit one patient record
    Submit(SubmitArgs),
    /// Produce a fresh cache-busted source for a chart image
    Chart {
        #[arg(value_enum)]
        kind: ChartKind,
    },
}

#[derive(Args, Debug)]
pub struct SubmitArgs {
    #[arg(long, default_value = "")]
    pub nome: String,
    #[arg(long, default_value = "")]
    pub idade: String,
    #[arg(long, default_value = "")]
    pub genero: String,
    #[arg(long, default_value = "")]
    pub peso: String,
    #[arg(long, default_value = "")]
    pub altura: String,
    #[arg(long, default_value = "")]
    pub bairro: String,
    #[arg(long, default_value = "")]
    pub data: String,
    #[arg(long, default_value = "")]
    pub diagnostico: String,
}

impl From<&SubmitArgs> for PatientRecord {
    fn from(a: &SubmitArgs) -> Self {
        PatientRecord {
            nome: a.nome.clone(),
            idade: a.idade.clone(),
            genero: a.genero.clone(),
            peso: a.peso.clone(),
            altura: a.altura.clone(),
            bairro: a.bairro.clone(),
            data: a.data.clone(),
            diagnostico: a.diagnostico.clone(),
        }
    }
}
