use astranex_core::enums::ScenarioPhase;

/// Why a command was rejected. State is unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("no asteroid selected")]
    NotConfigured,

    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    #[error("{command} not allowed in phase {phase:?}")]
    InvalidPhase {
        command: &'static str,
        phase: ScenarioPhase,
    },

    #[error("unknown asteroid '{0}'")]
    UnknownAsteroid(String),

    #[error("invalid {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
