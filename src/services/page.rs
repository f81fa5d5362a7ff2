use crate::domain::constants::{DATE_FILTER_ELEMENT, STATUS_ELEMENT};
use crate::domain::models::{DateFilter, MapImage, MapVariant};
use serde::Serialize;

/// The page elements the controller reads and writes.
pub trait PageView {
    fn date_filter(&self) -> DateFilter;
    fn set_status(&mut self, text: &str);
    fn map_source(&self, variant: MapVariant) -> String;
    /// Points the image at `src` and makes it visible.
    fn show_map(&mut self, variant: MapVariant, src: String);
    /// Blocking notification to the user.
    fn alert(&mut self, message: &str);
}

/// In-memory page, rendered to the terminal once a command finishes.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Page {
    #[serde(rename = "saida")]
    pub status: String,
    #[serde(rename = "data_filtro")]
    pub date_filter: String,
    pub mapa_geral: MapImage,
    pub mapa_data: MapImage,
    pub alerts: Vec<String>,
}

impl Page {
    pub fn with_date_filter(value: impl Into<String>) -> Self {
        Page {
            date_filter: value.into(),
            ..Page::default()
        }
    }

    pub fn map(&self, variant: MapVariant) -> &MapImage {
        match variant {
            MapVariant::Geral => &self.mapa_geral,
            MapVariant::Data => &self.mapa_data,
        }
    }

    fn map_mut(&mut self, variant: MapVariant) -> &mut MapImage {
        match variant {
            MapVariant::Geral => &mut self.mapa_geral,
            MapVariant::Data => &mut self.mapa_data,
        }
    }

    /// Text rendering: status, visible maps, then alerts.
    pub fn render_text(&self) -> String {
        let mut lines = Vec::new();
        if !self.date_filter.is_empty() {
            lines.push(format!("{}: {}", DATE_FILTER_ELEMENT, self.date_filter));
        }
        lines.push(format!("{}: {}", STATUS_ELEMENT, self.status));
        for variant in MapVariant::ALL {
            let img = self.map(variant);
            if img.visible {
                lines.push(format!("{}: {}", variant.element_id(), img.src));
            }
        }
        for a in &self.alerts {
            lines.push(format!("alert: {}", a));
        }
        lines.join("\n")
    }
}

impl PageView for Page {
    fn date_filter(&self) -> DateFilter {
        DateFilter(self.date_filter.clone())
    }

    fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
    }

    fn map_source(&self, variant: MapVariant) -> String {
        self.map(variant).src.clone()
    }

    fn show_map(&mut self, variant: MapVariant, src: String) {
        let img = self.map_mut(variant);
        img.src = src;
        img.visible = true;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
