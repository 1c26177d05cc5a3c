//! Figure, trace and layout types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while exporting a figure
#[derive(Error, Debug)]
pub enum ChartError {
    /// CSV writer failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Exported bytes could not be finalized
    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// Plotly-style text node (`{"text": "..."}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Axis configuration; only the title is used
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTitle {
    pub title: Text,
}

/// Animation hint for the display layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Duration in milliseconds
    pub duration: u64,
}

/// Line appearance of a trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
}

impl LineStyle {
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }
}

/// A single line series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: String,
    pub mode: String,
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub line: LineStyle,
}

impl Trace {
    /// Scatter trace drawn as a line
    pub fn line(name: impl Into<String>, x: Vec<f64>, y: Vec<f64>, line: LineStyle) -> Self {
        Self {
            kind: "scatter".to_string(),
            mode: "lines".to_string(),
            name: name.into(),
            x,
            y,
            line,
        }
    }
}

/// Figure layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: Text,
    pub xaxis: AxisTitle,
    pub yaxis: AxisTitle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
}

impl Layout {
    pub fn new(title: &str, x_title: &str, y_title: &str) -> Self {
        Self {
            title: Text::new(title),
            xaxis: AxisTitle {
                title: Text::new(x_title),
            },
            yaxis: AxisTitle {
                title: Text::new(y_title),
            },
            transition: None,
        }
    }
}

/// A complete chart: traces plus layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(layout: Layout) -> Self {
        Self {
            data: Vec::new(),
            layout,
        }
    }

    pub fn add_trace(&mut self, trace: Trace) -> &mut Self {
        self.data.push(trace);
        self
    }

    /// Set the transition duration hint (ms)
    pub fn with_transition(mut self, duration: u64) -> Self {
        self.layout.transition = Some(Transition { duration });
        self
    }

    /// Look up a trace by name
    pub fn trace(&self, name: &str) -> Option<&Trace> {
        self.data.iter().find(|t| t.name == name)
    }

    /// Export as CSV: `k` plus one column per trace, one row per x value.
    ///
    /// Rows follow the x values of the first trace; traces are expected to
    /// share the same axis.
    pub fn to_csv(&self) -> Result<String, ChartError> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        let mut header = Vec::with_capacity(self.data.len() + 1);
        header.push(self.layout.xaxis.title.text.clone());
        header.extend(self.data.iter().map(|t| t.name.clone()));
        writer.write_record(&header)?;

        let xs = self.data.first().map(|t| t.x.as_slice()).unwrap_or(&[]);
        for (i, x) in xs.iter().enumerate() {
            let mut row = Vec::with_capacity(self.data.len() + 1);
            row.push(x.to_string());
            for trace in &self.data {
                row.push(trace.y.get(i).map(|v| v.to_string()).unwrap_or_default());
            }
            writer.write_record(&row)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ChartError::Encoding(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| ChartError::Encoding(e.to_string()))
    }
}
