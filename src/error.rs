use thiserror::Error;

use crate::core::ChartKind;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("duplicate chart definition id `{0}`")]
    DuplicateDefinitionId(String),

    #[error("definition `{definition_id}` has kind {actual:?}, builder expects {expected:?}")]
    KindMismatch {
        definition_id: String,
        expected: ChartKind,
        actual: ChartKind,
    },

    #[error("definition `{definition_id}` requires missing engine extension `{extension}`")]
    MissingEngineExtension {
        definition_id: String,
        extension: String,
    },

    #[error("engine rejected definition `{definition_id}`: {reason}")]
    EngineRejected {
        definition_id: String,
        reason: String,
    },

    #[error("failed to dispose instance for `{definition_id}`: {reason}")]
    DisposalFailed {
        definition_id: String,
        reason: String,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
