//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module serializes chart payloads and calls those globals.

use agri_core::chart::{HealthBarChart, NdviLineChart};

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static NDVI_LINE_CHART_JS: &str = include_str!("../assets/js/ndvi-line-chart.js");
static HEALTH_BAR_CHART_JS: &str = include_str!("../assets/js/health-bar-chart.js");

/// Globals promoted to `window` once the scripts are evaluated.
const CHART_GLOBALS: [&str; 5] = [
    "renderNdviLineChart",
    "renderHealthBarChart",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Agri JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "''".to_string())
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define their functions with `function` declarations.
/// They are evaluated at global scope via indirect eval once D3 is ready and
/// each function is then promoted to `window.*` explicitly. Safe to call
/// more than once.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, NDVI_LINE_CHART_JS, HEALTH_BAR_CHART_JS].join("\n");

    let promote = CHART_GLOBALS
        .iter()
        .map(|name| format!("if (typeof {0} !== 'undefined') window.{0} = {0};", name))
        .collect::<Vec<_>>()
        .join("\n");

    call_js(&format!(
        r#"
        (function() {{
            if (window.__agriChartsReady || window.__agriChartsLoading) return;
            window.__agriChartsLoading = true;
            window.__agriChartScripts = {scripts};
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__agriChartScripts);
                    delete window.__agriChartScripts;
                    {promote}
                    window.__agriChartsReady = true;
                    console.log('Agri charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        scripts = js_string(&all_js),
        promote = promote,
    ));
}

/// Call `window[function]` once D3, the chart scripts and the container
/// element all exist.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__agriChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({container})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({container}, {data}, {config});
                    }} catch(e) {{ console.error('[Agri] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
        function = function,
        container = js_string(container_id),
        data = js_string(data_json),
        config = js_string(config_json),
    ));
}

/// Render the NDVI time-series line chart into `container_id`.
pub fn render_line_chart(container_id: &str, chart: &NdviLineChart) {
    match (chart.data_json(), chart.config_json()) {
        (Ok(data), Ok(config)) => {
            render_when_ready("renderNdviLineChart", container_id, &data, &config)
        }
        (Err(e), _) | (_, Err(e)) => log::error!("Failed to serialize NDVI chart: {}", e),
    }
}

/// Render the health distribution bar chart into `container_id`.
pub fn render_bar_chart(container_id: &str, chart: &HealthBarChart) {
    match (chart.data_json(), chart.config_json()) {
        (Ok(data), Ok(config)) => {
            render_when_ready("renderHealthBarChart", container_id, &data, &config)
        }
        (Err(e), _) | (_, Err(e)) => log::error!("Failed to serialize health chart: {}", e),
    }
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = '';",
        js_string(container_id)
    ));
}

#[cfg(test)]
mod tests {
    use super::{js_string, HEALTH_BAR_CHART_JS, NDVI_LINE_CHART_JS, TOOLTIP_JS};

    #[test]
    fn test_js_string_escapes_quotes() {
        assert_eq!(js_string(r#"[{"label":"it's"}]"#), r#""[{\"label\":\"it's\"}]""#);
        assert_eq!(js_string("a\nb"), r#""a\nb""#);
    }

    #[test]
    fn test_tooltip_writes_labels_as_text() {
        assert!(TOOLTIP_JS.contains("textContent"));
        assert!(!TOOLTIP_JS.contains("innerHTML"));
        for script in [NDVI_LINE_CHART_JS, HEALTH_BAR_CHART_JS] {
            assert!(!script.contains("<br>"));
            assert!(script.contains("showTooltip(event, [d.label,"));
        }
    }

    #[test]
    fn test_line_chart_positions_points_by_index() {
        assert!(NDVI_LINE_CHART_JS.contains(".domain(d3.range(data.length))"));
        assert!(!NDVI_LINE_CHART_JS.contains("x(d.label)"));
    }
}
