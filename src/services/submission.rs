use crate::domain::models::PatientRecord;
use chrono::NaiveDate;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Campo obrigatório ausente: {0}")]
    MissingField(&'static str),
    #[error("Formato de data inválido. Use AAAA-MM-DD.")]
    InvalidDate,
}

/// Same checks the server applies, so a bad record never leaves the client.
pub fn validate_record(record: &PatientRecord) -> Result<(), SubmissionError> {
    let fields: [(&'static str, &str); 8] = [
        ("nome", record.nome.as_str()),
        ("idade", record.idade.as_str()),
        ("genero", record.genero.as_str()),
        ("peso", record.peso.as_str()),
        ("altura", record.altura.as_str()),
        ("bairro", record.bairro.as_str()),
        ("data", record.data.as_str()),
        ("diagnostico", record.diagnostico.as_str()),
    ];
    if let Some(&(name, _)) = fields.iter().find(|(_, v)| v.trim().is_empty()) {
        return Err(SubmissionError::MissingField(name));
    }
    NaiveDate::parse_from_str(&record.data, "%Y-%m-%d")
        .map_err(|_| SubmissionError::InvalidDate)?;
    Ok(())
}
