//! Standalone HTML line charts (ECharts).

use serde_json::{Value, json};

use super::series::Series;

const ECHARTS_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";
const THEME_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/echarts@5/theme/infographic.js";
const THEME: &str = "infographic";

/// A single-series line chart
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub subtitle: String,
    pub series_name: String,
    pub series: Series,
    /// Fixed y-axis range, automatic when `None`
    pub y_bounds: Option<(f64, f64)>,
}

impl LineChart {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        series_name: impl Into<String>,
        series: Series,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            series_name: series_name.into(),
            series,
            y_bounds: None,
        }
    }

    pub fn with_y_bounds(mut self, min: f64, max: f64) -> Self {
        self.y_bounds = Some((min, max));
        self
    }

    /// ECharts option object; values are rounded to cents
    pub fn option(&self) -> Value {
        let data: Vec<Option<String>> = self
            .series
            .values
            .iter()
            .map(|v| v.map(|v| format!("{v:.2}")))
            .collect();

        let mut y_axis = json!({ "type": "value" });
        if let Some((min, max)) = self.y_bounds {
            y_axis["min"] = json!(min);
            y_axis["max"] = json!(max);
        }

        json!({
            "title": { "text": self.title, "subtext": self.subtitle },
            "tooltip": { "trigger": "axis" },
            "legend": { "data": [self.series_name] },
            "xAxis": { "type": "category", "data": self.series.labels },
            "yAxis": y_axis,
            "series": [{
                "name": self.series_name,
                "type": "line",
                "smooth": true,
                "data": data,
                "markPoint": { "symbol": "circle" },
            }],
        })
    }

    /// Full HTML page rendering this chart
    pub fn render(&self) -> String {
        // Keep a stray "</script>" in a label from closing the script block.
        let option = self.option().to_string().replace("</", "<\\/");
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <script src="{ECHARTS_SCRIPT}"></script>
  <script src="{THEME_SCRIPT}"></script>
</head>
<body>
  <div id="chart" style="width:900px;height:500px;"></div>
  <script type="text/javascript">
    var chart = echarts.init(document.getElementById("chart"), "{THEME}");
    chart.setOption({option});
  </script>
</body>
</html>
"#,
            title = html_escape(&self.title),
        )
    }
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
