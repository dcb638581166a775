//! Query results turned into the `(data, config)` JSON pair each D3 renderer
//! takes.
//!
//! The builders are pure so panels stay thin: a panel reads its selections,
//! asks for a payload and hands it to [`crate::js_bridge::render_chart`].

use crate::js_bridge::ChartRenderer;
use crate::palette;
use hrd_core::{AgeFilter, ChartKind, Field, Readmitted};
use hrd_data::rounding::format_metric;
use hrd_db::models::{DiagnosisBox, GroupMean, HistogramBin, ScatterPoint, SummaryMetrics, ValueCount};
use hrd_db::Database;
use serde::Serialize;
use serde_json::json;

/// Serialized chart data and configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPayload {
    pub data_json: String,
    pub config_json: String,
}

impl ChartPayload {
    fn new<T: Serialize>(data: &T, config: serde_json::Value) -> anyhow::Result<Self> {
        Ok(Self {
            data_json: serde_json::to_string(data)?,
            config_json: config.to_string(),
        })
    }
}

/// A labelled value for one summary tile.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricTileData {
    pub label: &'static str,
    pub value: String,
}

/// The six summary tiles, in display order.
pub fn summary_tiles(metrics: &SummaryMetrics) -> Vec<MetricTileData> {
    let rate = match metrics.readmission_rate {
        Some(_) => format!("{}%", format_metric(metrics.readmission_rate)),
        None => format_metric(None),
    };
    vec![
        MetricTileData {
            label: "Total Patients",
            value: metrics.total_patients.to_string(),
        },
        MetricTileData {
            label: "Avg. Stay (days)",
            value: format_metric(metrics.avg_stay),
        },
        MetricTileData {
            label: "Readmission Rate",
            value: rate,
        },
        MetricTileData {
            label: "Avg. Procedures",
            value: format_metric(metrics.avg_procedures),
        },
        MetricTileData {
            label: "Avg. Lab Tests",
            value: format_metric(metrics.avg_lab_tests),
        },
        MetricTileData {
            label: "Avg. Medications",
            value: format_metric(metrics.avg_medications),
        },
    ]
}

/// Distinct group values in order of first appearance, each paired with a
/// colour from [`palette::SEQUENCE`].
fn sequence_colors<'a>(
    values: impl Iterator<Item = &'a str>,
) -> (Vec<&'a str>, serde_json::Map<String, serde_json::Value>) {
    let mut order: Vec<&str> = Vec::new();
    for value in values {
        if !order.contains(&value) {
            order.push(value);
        }
    }
    let colors = order
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let color = palette::SEQUENCE[i % palette::SEQUENCE.len()];
            (value.to_string(), json!(color))
        })
        .collect();
    (order, colors)
}

// ───────────────────── Distribution ─────────────────────

/// Histogram over numeric bins.
pub fn histogram_payload(field: Field, bins: &[HistogramBin]) -> anyhow::Result<ChartPayload> {
    let data: Vec<_> = bins
        .iter()
        .map(|b| json!({ "label": b.label, "count": b.count }))
        .collect();
    ChartPayload::new(
        &data,
        json!({
            "xAxisLabel": field.label(),
            "yAxisLabel": "Count",
            "color": palette::PRIMARY,
            "barGap": 0.2,
        }),
    )
}

/// Histogram with one bar per category.
pub fn category_histogram_payload(field: Field, counts: &[ValueCount]) -> anyhow::Result<ChartPayload> {
    let data: Vec<_> = counts
        .iter()
        .map(|c| json!({ "label": c.value, "count": c.count }))
        .collect();
    ChartPayload::new(
        &data,
        json!({
            "xAxisLabel": field.label(),
            "yAxisLabel": "Count",
            "color": palette::PRIMARY,
            "barGap": 0.2,
        }),
    )
}

/// Pie with one slice per distinct value.
pub fn pie_payload(field: Field, counts: &[ValueCount]) -> anyhow::Result<ChartPayload> {
    let data: Vec<_> = counts
        .iter()
        .map(|c| json!({ "label": c.value, "count": c.count }))
        .collect();
    ChartPayload::new(
        &data,
        json!({
            "title": field.label(),
            "colors": [palette::PRIMARY],
        }),
    )
}

/// Query and build the distribution chart for the current selections.
pub fn distribution_chart(
    db: &Database,
    field: Field,
    age: &AgeFilter,
    kind: ChartKind,
    max_bins: usize,
) -> anyhow::Result<(ChartRenderer, ChartPayload)> {
    match kind {
        ChartKind::Histogram if field.is_numeric() => {
            let bins = db.query_histogram(field, age, max_bins)?;
            Ok((ChartRenderer::Histogram, histogram_payload(field, &bins)?))
        }
        ChartKind::Histogram => {
            let counts = db.query_value_counts(field, age)?;
            Ok((ChartRenderer::Histogram, category_histogram_payload(field, &counts)?))
        }
        ChartKind::Pie => {
            let counts = db.query_value_counts(field, age)?;
            Ok((ChartRenderer::Pie, pie_payload(field, &counts)?))
        }
    }
}

// ───────────────────── Length of stay ─────────────────────

/// Scatter of `factor` against length of stay, coloured by readmission.
pub fn scatter_payload(factor: Field, points: &[ScatterPoint]) -> anyhow::Result<ChartPayload> {
    ChartPayload::new(
        &points,
        json!({
            "xAxisLabel": factor.label(),
            "yAxisLabel": "Time in hospital",
            "colorKey": "readmitted",
            "colorMap": {
                (Readmitted::Yes.as_str()): palette::PRIMARY,
                (Readmitted::No.as_str()): palette::SECONDARY,
            },
        }),
    )
}

/// Box plot of length of stay per primary diagnosis and readmission status.
pub fn diagnosis_box_payload(boxes: &[DiagnosisBox]) -> anyhow::Result<ChartPayload> {
    let mut categories: Vec<&str> = Vec::new();
    for b in boxes {
        if !categories.contains(&b.diagnosis.as_str()) {
            categories.push(&b.diagnosis);
        }
    }
    let (groups, colors) = sequence_colors(boxes.iter().map(|b| b.readmitted.as_str()));
    ChartPayload::new(
        &boxes,
        json!({
            "xAxisLabel": "Primary diagnosis",
            "yAxisLabel": "Time in hospital",
            "categories": categories,
            "groups": groups,
            "colors": colors,
        }),
    )
}

// ───────────────────── Interventions ─────────────────────

/// Bars of the per-group means. Groups sharing an age bracket stack in one
/// colour; the readmission split is not drawn separately.
pub fn intervention_bar_payload(field: Field, means: &[GroupMean]) -> anyhow::Result<ChartPayload> {
    let mut categories: Vec<&str> = means.iter().map(|m| m.age_bracket.as_str()).collect();
    categories.dedup();
    ChartPayload::new(
        &means,
        json!({
            "xKey": "age_bracket",
            "yKey": "mean",
            "xAxisLabel": "age",
            "yAxisLabel": field.column(),
            "categories": categories,
            "color": palette::PRIMARY,
        }),
    )
}
