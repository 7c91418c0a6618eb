use devpulse_shared_models::MetricTable;
use serde_json::json;
use std::path::Path;

/// Plotly bar chart of one metric table, written as a standalone HTML page.
pub struct BarChart<'a> {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub table: &'a MetricTable,
}

impl<'a> BarChart<'a> {
    pub fn developer(coin_name: &str, table: &'a MetricTable) -> Self {
        let ratio = issue_ratio(table)
            .map(|ratio| format!("{ratio:.2}"))
            .unwrap_or_else(|| "n/a".to_string());

        Self {
            title: format!("{coin_name} developer data (closed/total issues ratio: {ratio})"),
            x_label: "Metric",
            y_label: "Value",
            table,
        }
    }

    pub fn community(coin_name: &str, table: &'a MetricTable) -> Self {
        Self {
            title: format!("{coin_name} community data"),
            x_label: "Metric",
            y_label: "Value",
            table,
        }
    }

    pub fn to_html(&self) -> String {
        let data = json!([{
            "x": self.table.metrics().collect::<Vec<_>>(),
            "y": self.table.values().collect::<Vec<_>>(),
            "type": "bar",
            "hovertemplate": "%{x}: %{y}<extra></extra>",
            "marker": { "color": "rgb(55, 83, 109)" }
        }]);

        let layout = json!({
            "title": { "text": self.title },
            "xaxis": { "title": { "text": self.x_label } },
            "yaxis": { "title": { "text": self.y_label } }
        });

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <title>{title}</title>
    <script src="https://cdn.plot.ly/plotly-latest.min.js"></script>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 20px; }}
        .container {{ width: 900px; height: 600px; }}
    </style>
</head>
<body>
    <div class="container" id="chart"></div>
    <script>
        var data = {data};
        var layout = {layout};

        Plotly.newPlot('chart', data, layout);
    </script>
</body>
</html>
"#,
            title = escape_html(&self.title),
            data = script_safe(&data.to_string()),
            layout = script_safe(&layout.to_string()),
        )
    }

    pub fn write(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_html())
    }
}

/// `closed_issues / total_issues` rounded to 2 decimals. `None` when either
/// metric is missing or there are no issues at all.
pub fn issue_ratio(table: &MetricTable) -> Option<f64> {
    let closed = table.get("closed_issues")?;
    let total = table.get("total_issues")?;

    if total == 0.0 {
        return None;
    }

    Some((closed / total * 100.0).round() / 100.0)
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// keeps a "</script>" inside a JSON string from closing the script block
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}
