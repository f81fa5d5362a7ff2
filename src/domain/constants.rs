pub const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub const RUN_PATH: &str = "/rodar_dbscan";
pub const RUN_DATE_PATH: &str = "/rodar_dbscan_data";
pub const MAP_PATH: &str = "/mapa";
pub const LOG_PATH: &str = "/saida_python";
pub const SUBMIT_PATH: &str = "/enviar_dados";
pub const CHART_PATH: &str = "/grafico";

pub const STATUS_ELEMENT: &str = "saida";
pub const DATE_FILTER_ELEMENT: &str = "data_filtro";

pub const MISSING_DATE_ALERT: &str = "Escolha uma data!";
pub const TRANSPORT_FAILURE_PREFIX: &str = "Falha na comunicação com o servidor";
