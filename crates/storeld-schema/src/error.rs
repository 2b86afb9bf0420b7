use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("JSON serialization error for {locale} schema: {source}")]
    Serialize {
        locale: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
