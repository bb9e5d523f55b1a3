use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::ChartDefinition;
use crate::error::{ChartError, ChartResult};

/// Ordered, read-only set of chart definitions known at startup.
///
/// Construction validates every definition and rejects duplicate ids, so a
/// render pass can rely on one registry slot per definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<ChartDefinition>",
    into = "Vec<ChartDefinition>"
)]
pub struct DefinitionCatalog {
    definitions: Vec<ChartDefinition>,
}

impl DefinitionCatalog {
    pub fn new(definitions: Vec<ChartDefinition>) -> ChartResult<Self> {
        let mut seen = IndexSet::with_capacity(definitions.len());
        for definition in &definitions {
            definition.validate()?;
            if !seen.insert(definition.id.as_str()) {
                return Err(ChartError::DuplicateDefinitionId(definition.id.clone()));
            }
        }
        Ok(Self { definitions })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChartDefinition> {
        self.definitions.iter()
    }

    #[must_use]
    pub fn get(&self, definition_id: &str) -> Option<&ChartDefinition> {
        self.definitions
            .iter()
            .find(|definition| definition.id == definition_id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.definitions
            .iter()
            .map(|definition| definition.id.as_str())
    }
}

impl TryFrom<Vec<ChartDefinition>> for DefinitionCatalog {
    type Error = ChartError;

    fn try_from(definitions: Vec<ChartDefinition>) -> ChartResult<Self> {
        Self::new(definitions)
    }
}

impl From<DefinitionCatalog> for Vec<ChartDefinition> {
    fn from(catalog: DefinitionCatalog) -> Self {
        catalog.definitions
    }
}

impl<'a> IntoIterator for &'a DefinitionCatalog {
    type Item = &'a ChartDefinition;
    type IntoIter = std::slice::Iter<'a, ChartDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.definitions.iter()
    }
}
