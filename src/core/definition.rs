use serde::{Deserialize, Serialize};

use crate::core::RenderOptions;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Chart families the dashboard knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    /// Independent values against categorical labels.
    Bar,
    /// Smoothed, filled trend curves.
    Line,
    /// Two-axis categorical grid of values.
    Matrix,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub color: Color,
}

/// One named value series of a bar or line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub name: String,
    pub values: Vec<f64>,
    pub style: SeriesStyle,
}

impl SeriesSpec {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<f64>, color: Color) -> Self {
        Self {
            name: name.into(),
            values,
            style: SeriesStyle { color },
        }
    }
}

/// Labels shared by all series plus the series themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalDataset {
    pub labels: Vec<String>,
    pub series: Vec<SeriesSpec>,
}

impl CategoricalDataset {
    fn validate(&self, definition_id: &str) -> ChartResult<()> {
        if self.labels.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "definition `{definition_id}` must declare at least one label"
            )));
        }
        if self.series.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "definition `{definition_id}` must declare at least one series"
            )));
        }
        for series in &self.series {
            if series.values.len() != self.labels.len() {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` of `{definition_id}` has {} values for {} labels",
                    series.name,
                    series.values.len(),
                    self.labels.len()
                )));
            }
            if series.values.iter().any(|value| !value.is_finite()) {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` of `{definition_id}` contains non-finite values",
                    series.name
                )));
            }
            series.style.color.validate()?;
        }
        Ok(())
    }
}

/// One cell of a value matrix, addressed by row and column category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixCell {
    pub row_key: String,
    pub col_key: String,
    pub value: f64,
}

impl MatrixCell {
    #[must_use]
    pub fn new(row_key: impl Into<String>, col_key: impl Into<String>, value: f64) -> Self {
        Self {
            row_key: row_key.into(),
            col_key: col_key.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixDataset {
    pub name: String,
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    pub cells: Vec<MatrixCell>,
}

impl MatrixDataset {
    fn validate(&self, definition_id: &str) -> ChartResult<()> {
        if self.row_labels.is_empty() || self.col_labels.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "matrix `{definition_id}` must declare labels on both axes"
            )));
        }
        for (index, cell) in self.cells.iter().enumerate() {
            if !self.row_labels.contains(&cell.row_key) {
                return Err(ChartError::InvalidData(format!(
                    "matrix `{definition_id}` cell row `{}` is not a declared row label",
                    cell.row_key
                )));
            }
            if !self.col_labels.contains(&cell.col_key) {
                return Err(ChartError::InvalidData(format!(
                    "matrix `{definition_id}` cell column `{}` is not a declared column label",
                    cell.col_key
                )));
            }
            if !cell.value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "matrix `{definition_id}` cell ({}, {}) must be finite",
                    cell.row_key, cell.col_key
                )));
            }
            let duplicate = self.cells[..index]
                .iter()
                .any(|prior| prior.row_key == cell.row_key && prior.col_key == cell.col_key);
            if duplicate {
                return Err(ChartError::InvalidData(format!(
                    "matrix `{definition_id}` declares cell ({}, {}) twice",
                    cell.row_key, cell.col_key
                )));
            }
        }
        Ok(())
    }
}

/// Kind-dependent dataset shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DatasetSpec {
    Categorical(CategoricalDataset),
    Matrix(MatrixDataset),
}

/// Static description of one dashboard chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDefinition {
    pub id: String,
    pub surface_id: String,
    pub kind: ChartKind,
    pub dataset: DatasetSpec,
    #[serde(default)]
    pub options: RenderOptions,
}

impl ChartDefinition {
    /// Checks that the dataset shape matches `kind` and that values are usable.
    pub fn validate(&self) -> ChartResult<()> {
        if self.id.is_empty() {
            return Err(ChartError::InvalidData(
                "chart definition id must not be empty".to_owned(),
            ));
        }
        if self.surface_id.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "definition `{}` must name a target surface",
                self.id
            )));
        }

        match (self.kind, &self.dataset) {
            (ChartKind::Bar | ChartKind::Line, DatasetSpec::Categorical(dataset)) => {
                dataset.validate(&self.id)?;
            }
            (ChartKind::Matrix, DatasetSpec::Matrix(dataset)) => dataset.validate(&self.id)?,
            (kind, _) => {
                return Err(ChartError::InvalidData(format!(
                    "definition `{}` of kind {kind:?} carries a mismatched dataset shape",
                    self.id
                )));
            }
        }

        self.options.validate()
    }

    #[must_use]
    pub fn categorical(&self) -> Option<&CategoricalDataset> {
        match &self.dataset {
            DatasetSpec::Categorical(dataset) => Some(dataset),
            DatasetSpec::Matrix(_) => None,
        }
    }

    #[must_use]
    pub fn matrix(&self) -> Option<&MatrixDataset> {
        match &self.dataset {
            DatasetSpec::Matrix(dataset) => Some(dataset),
            DatasetSpec::Categorical(_) => None,
        }
    }
}
