use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to serialize report: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },
    #[error("failed to flush report: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
