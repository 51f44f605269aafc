use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActabError {
    #[error("invalid actuator number '{0}': must contain only digits")]
    InvalidInstanceId(String),

    #[error("duplicate actuator number: {0}")]
    DuplicateInstanceId(String),

    #[error("actuator name must not be empty")]
    EmptyInstanceName,

    #[error("no data found in pasted text")]
    EmptyImport,

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("template name must not be empty")]
    InvalidTemplateName,

    #[error("not a template file: {0}")]
    InvalidTemplateFile(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ActabError>;
