//! Tabular report rendering
//!
//! Every command funnels its numbers through [`Report`] so the same result
//! can be printed as an aligned table, CSV or JSON.

use std::io::Write;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::Result;

/// One labelled line of a report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// Row label (a spot, a Greek name, ...)
    pub label: String,
    /// One value per column
    pub values: Vec<f64>,
}

/// Titled table of labelled rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Heading printed above the table
    pub title: String,
    /// Header of the label column
    pub label_header: String,
    /// Value column headers
    pub columns: Vec<String>,
    /// Body rows
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Creates an empty report.
    pub fn new(
        title: impl Into<String>,
        label_header: impl Into<String>,
        columns: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            label_header: label_header.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row. Short rows are padded with NaN.
    pub fn push(&mut self, label: impl Into<String>, mut values: Vec<f64>) {
        if values.len() < self.columns.len() {
            values.resize(self.columns.len(), f64::NAN);
        }
        self.rows.push(ReportRow {
            label: label.into(),
            values,
        });
    }

    /// One row per spot, one column holding `values`.
    pub fn from_vector(
        title: impl Into<String>,
        column: impl Into<String>,
        spots: &[f64],
        values: &[f64],
    ) -> Self {
        let mut report = Self::new(title, "S", vec![column.into()]);
        for (spot, value) in spots.iter().zip(values) {
            report.push(spot.to_string(), vec![*value]);
        }
        report
    }

    /// Transposes a `[scenario][spot]` surface into one row per spot and
    /// one column per scenario.
    pub fn from_surface(
        title: impl Into<String>,
        scenarios: Vec<String>,
        spots: &[f64],
        surface: &[Vec<f64>],
    ) -> Self {
        let mut report = Self::new(title, "S", scenarios);
        for (i, spot) in spots.iter().enumerate() {
            let values = surface
                .iter()
                .map(|row| row.get(i).copied().unwrap_or(f64::NAN))
                .collect();
            report.push(spot.to_string(), values);
        }
        report
    }

    /// Writes the report to `out` in the requested format.
    pub fn render<W: Write>(&self, format: OutputFormat, precision: usize, mut out: W) -> Result<()> {
        match format {
            OutputFormat::Table => self.write_table(precision, &mut out)?,
            OutputFormat::Csv => self.write_csv(precision, &mut out)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut out, self)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }

    fn formatted(&self, precision: usize) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                std::iter::once(row.label.clone())
                    .chain(row.values.iter().map(|v| format!("{:.*}", precision, v)))
                    .collect()
            })
            .collect()
    }

    fn header(&self) -> Vec<String> {
        std::iter::once(self.label_header.clone())
            .chain(self.columns.iter().cloned())
            .collect()
    }

    fn write_table<W: Write>(&self, precision: usize, out: &mut W) -> Result<()> {
        let header = self.header();
        let body = self.formatted(precision);

        let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
        for line in &body {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.len());
            }
        }

        if !self.title.is_empty() {
            writeln!(out, "{}", self.title)?;
            writeln!(out, "{}", "=".repeat(self.title.len()))?;
        }

        let render_line = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:>width$}", cell, width = width))
                .collect::<Vec<_>>()
                .join("  ")
        };

        writeln!(out, "{}", render_line(&header))?;
        let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        writeln!(out, "{}", "-".repeat(total))?;
        for line in &body {
            writeln!(out, "{}", render_line(line))?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn write_csv<W: Write>(&self, precision: usize, out: &mut W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(self.header())?;
        for line in self.formatted(precision) {
            writer.write_record(&line)?;
        }
        writer.flush()?;
        Ok(())
    }
}
