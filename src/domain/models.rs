use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Response envelope of the clustering endpoints.
///
/// The server is expected to send exactly one of the two fields. When both
/// are present `saida` wins; when neither is, the rendered text is empty.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ClusterResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saida: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erro: Option<String>,
}

impl ClusterResult {
    /// An empty `saida` still takes precedence over `erro`.
    pub fn message(&self) -> &str {
        self.saida
            .as_deref()
            .or(self.erro.as_deref())
            .unwrap_or_default()
    }

    pub fn is_error(&self) -> bool {
        self.saida.is_none() && self.erro.is_some()
    }
}

#[derive(Debug, Serialize)]
pub struct DateRequest<'a> {
    pub data_ref: &'a str,
}

/// Envelope returned by the record submission endpoint.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct SubmitResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mensagem: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erro: Option<String>,
}

impl SubmitResult {
    pub fn message(&self) -> &str {
        self.mensagem
            .as_deref()
            .or(self.erro.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MapVariant {
    Geral,
    Data,
}

impl MapVariant {
    pub const ALL: [MapVariant; 2] = [MapVariant::Geral, MapVariant::Data];

    pub fn as_str(self) -> &'static str {
        match self {
            MapVariant::Geral => "geral",
            MapVariant::Data => "data",
        }
    }

    /// Identifier of the image element showing this variant.
    pub fn element_id(self) -> String {
        format!("mapa_{}", self.as_str())
    }
}

impl fmt::Display for MapVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    ClusterGeral,
    BarrasGeral,
    ClusterData,
    BarrasData,
    PizzaCovid,
    PizzaZika,
    PizzaDengue,
    PizzaInfluenza,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::ClusterGeral => "cluster_geral",
            ChartKind::BarrasGeral => "barras_geral",
            ChartKind::ClusterData => "cluster_data",
            ChartKind::BarrasData => "barras_data",
            ChartKind::PizzaCovid => "pizza_covid",
            ChartKind::PizzaZika => "pizza_zika",
            ChartKind::PizzaDengue => "pizza_dengue",
            ChartKind::PizzaInfluenza => "pizza_influenza",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct MapImage {
    pub src: String,
    pub visible: bool,
}

/// Value of the `data_filtro` input, read at call time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateFilter(pub String);

impl DateFilter {
    /// The raw value when it carries anything other than whitespace.
    pub fn value(&self) -> Option<&str> {
        if self.0.trim().is_empty() {
            None
        } else {
            Some(&self.0)
        }
    }
}

/// Patient record accepted by `/enviar_dados`.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct PatientRecord {
    pub nome: String,
    pub idade: String,
    pub genero: String,
    pub peso: String,
    pub altura: String,
    pub bairro: String,
    pub data: String,
    pub diagnostico: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub server: Option<String>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

#[derive(Serialize, Clone, Debug)]
pub struct ChartSource {
    pub kind: ChartKind,
    pub src: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct LogReport {
    pub server: String,
    pub output: String,
}
