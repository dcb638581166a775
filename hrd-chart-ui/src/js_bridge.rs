//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module serializes arguments as JS string literals and calls those globals.

use crate::payload::ChartPayload;

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static HISTOGRAM_JS: &str = include_str!("../assets/js/histogram-chart.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");
static BOX_CHART_JS: &str = include_str!("../assets/js/box-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// The renderer a payload is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartRenderer {
    Histogram,
    Pie,
    Scatter,
    Box,
    Bar,
}

impl ChartRenderer {
    /// Name of the global JS function that draws this chart.
    pub fn js_function(self) -> &'static str {
        match self {
            ChartRenderer::Histogram => "renderHistogram",
            ChartRenderer::Pie => "renderPieChart",
            ChartRenderer::Scatter => "renderScatterChart",
            ChartRenderer::Box => "renderBoxChart",
            ChartRenderer::Bar => "renderBarChart",
        }
    }
}

/// Quote `s` as a JS string literal. JSON strings are valid JS literals.
fn js_string_literal(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('HRD JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        web_sys::console::warn_1(&e);
    }
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderHistogram(...)` via
/// `function` declarations. They are evaluated at global scope through an
/// indirect `eval()` once D3 is ready, then promoted to `window.*`.
/// Safe to call more than once; later calls are no-ops in the browser.
pub fn init_charts() {
    let all_js = [
        TOOLTIP_JS,
        HISTOGRAM_JS,
        PIE_CHART_JS,
        SCATTER_CHART_JS,
        BOX_CHART_JS,
        BAR_CHART_JS,
    ]
    .join("\n");

    let store_js = format!(
        "if (!window.__hrdChartsReady) {{ window.__hrdChartScripts = {}; }}",
        js_string_literal(&all_js)
    );
    call_js(&store_js);

    let init_js = r#"
        (function() {
            if (window.__hrdChartsReady || window.__hrdChartsPolling) return;
            window.__hrdChartsPolling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__hrdChartScripts);
                    delete window.__hrdChartScripts;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    if (typeof renderHistogram !== 'undefined') window.renderHistogram = renderHistogram;
                    if (typeof renderPieChart !== 'undefined') window.renderPieChart = renderPieChart;
                    if (typeof renderScatterChart !== 'undefined') window.renderScatterChart = renderScatterChart;
                    if (typeof renderBoxChart !== 'undefined') window.renderBoxChart = renderBoxChart;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    window.__hrdChartsReady = true;
                    console.log('HRD charts initialized');
                }
            }, 100);
        })();
    "#;
    call_js(init_js);
}

/// Build the polling snippet that renders once D3, the chart scripts and
/// the container element are all available.
fn render_script(renderer: ChartRenderer, container_id: &str, payload: &ChartPayload) -> String {
    let function = renderer.js_function();
    let container = js_string_literal(container_id);
    let data = js_string_literal(&payload.data_json);
    let config = js_string_literal(&payload.config_json);
    format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__hrdChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({container})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({container}, {data}, {config});
                    }} catch(e) {{ console.error('[HRD] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Render `payload` into the element with id `container_id`.
///
/// Every renderer clears its container first, so a new call supersedes the
/// previous chart.
pub fn render_chart(renderer: ChartRenderer, container_id: &str, payload: &ChartPayload) {
    call_js(&render_script(renderer, container_id, payload));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = '';",
        js_string_literal(container_id)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_literal_escapes_quotes() {
        assert_eq!(js_string_literal("it's"), "\"it's\"");
        assert_eq!(js_string_literal(r#"{"a":"b"}"#), r#""{\"a\":\"b\"}""#);
        assert_eq!(js_string_literal("a\nb"), "\"a\\nb\"");
    }

    #[test]
    fn render_script_targets_renderer_and_container() {
        let payload = ChartPayload {
            data_json: r#"[{"label":"Family/GeneralPractice","count":3}]"#.to_string(),
            config_json: "{}".to_string(),
        };
        let js = render_script(ChartRenderer::Pie, "dist-chart", &payload);
        assert!(js.contains("window.renderPieChart(\"dist-chart\""));
        assert!(js.contains(r#"\"Family/GeneralPractice\""#));
    }

    #[test]
    fn renderer_names_are_distinct() {
        let names = [
            ChartRenderer::Histogram,
            ChartRenderer::Pie,
            ChartRenderer::Scatter,
            ChartRenderer::Box,
            ChartRenderer::Bar,
        ]
        .map(|r| r.js_function());
        let unique: std::collections::HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), 5);
    }
}
