//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The chart renderers live in `assets/js/*.js` and are written against the
//! D3 and Leaflet globals loaded from `index.html`. They are evaluated as
//! globals (no ES modules) and exposed via `window.*`. This module provides
//! safe Rust wrappers that serialize data and call those globals.

// Embed all renderer JS files at compile time
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static SEASONAL_HEATMAP_JS: &str = include_str!("../assets/js/seasonal-heatmap.js");
static AOI_MAP_JS: &str = include_str!("../assets/js/aoi-map.js");
static DATA_TABLE_JS: &str = include_str!("../assets/js/data-table.js");
static TREND_METRIC_JS: &str = include_str!("../assets/js/trend-metric.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('LSI JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the renderer scripts with a wait-for-libraries polling loop.
///
/// The renderer files define functions like `renderLineChart(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), we evaluate them
/// at global scope via indirect eval once both D3 and Leaflet are ready,
/// and then explicitly promote each function to `window.*`.
pub fn init_charts() {
    let all_js = [
        LINE_CHART_JS,
        SEASONAL_HEATMAP_JS,
        AOI_MAP_JS,
        DATA_TABLE_JS,
        TREND_METRIC_JS,
    ]
    .join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__lsiRendererScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForLibs = setInterval(function() {
                if (typeof d3 !== 'undefined' && typeof L !== 'undefined') {
                    clearInterval(waitForLibs);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__lsiRendererScripts);
                    delete window.__lsiRendererScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof renderSeasonalHeatmap !== 'undefined') window.renderSeasonalHeatmap = renderSeasonalHeatmap;
                    if (typeof renderAoiMap !== 'undefined') window.renderAoiMap = renderAoiMap;
                    if (typeof destroyAoiMap !== 'undefined') window.destroyAoiMap = destroyAoiMap;
                    if (typeof renderDataTable !== 'undefined') window.renderDataTable = renderDataTable;
                    if (typeof renderTrendMetric !== 'undefined') window.renderTrendMetric = renderTrendMetric;
                    window.__lsiRenderersReady = true;
                    console.log('LSI renderers initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the time series line chart for the active index.
///
/// Uses a polling loop to wait for the libraries to load, renderer scripts
/// to initialize, and the container DOM element to exist before rendering.
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            console.log('[LSI Debug] Initiating polling for line-chart');
            var poll = setInterval(function() {{
                console.log('[LSI Debug] Poll attempt:', {{
                    renderersReady: !!window.__lsiRenderersReady,
                    functionAvailable: typeof window.renderLineChart !== 'undefined',
                    domExists: !!document.getElementById('{container_id}'),
                    timestamp: Date.now()
                }});
                if (window.__lsiRenderersReady &&
                    typeof window.renderLineChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderLineChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[LSI] renderLineChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the year-by-month seasonal heatmap.
///
/// Uses a polling loop to wait for the libraries to load, renderer scripts
/// to initialize, and the container DOM element to exist before rendering.
pub fn render_seasonal_heatmap(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__lsiRenderersReady &&
                    typeof window.renderSeasonalHeatmap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderSeasonalHeatmap('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[LSI] renderSeasonalHeatmap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the Leaflet AOI map. `geojson` is the boundary FeatureCollection,
/// already normalized to WGS84.
pub fn render_aoi_map(container_id: &str, geojson: &str, config_json: &str) {
    let escaped_geojson = geojson.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__lsiRenderersReady &&
                    typeof window.renderAoiMap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderAoiMap('{container_id}', '{escaped_geojson}', '{escaped_config}');
                    }} catch(e) {{ console.error('[LSI] renderAoiMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the raw observation table.
///
/// Uses a polling loop to wait for the libraries to load, renderer scripts
/// to initialize, and the container DOM element to exist before rendering.
pub fn render_data_table(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__lsiRenderersReady &&
                    typeof window.renderDataTable !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderDataTable('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[LSI] renderDataTable error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the trend metric widget (line and area sparkline variants).
///
/// Uses a polling loop to wait for the libraries to load, renderer scripts
/// to initialize, and the container DOM element to exist before rendering.
pub fn render_trend_metric(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__lsiRenderersReady &&
                    typeof window.renderTrendMetric !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderTrendMetric('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[LSI] renderTrendMetric error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Tear down the Leaflet map instance for a container before clearing it.
/// Leaflet keeps internal state keyed to the element, so a plain innerHTML
/// wipe would leak the old map.
pub fn destroy_aoi_map(container_id: &str) {
    call_js(&format!(
        "if (typeof window.destroyAoiMap !== 'undefined') window.destroyAoiMap('{}');",
        container_id
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
