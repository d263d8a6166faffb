//! Chart.js configuration for the hero investment chart.

use serde_json::{json, Value};

pub const HERO_LABELS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
pub const HERO_DATA: [u32; 6] = [12, 19, 15, 25, 22, 30];
pub const GRADIENT_HEIGHT: f64 = 200.0;
pub const GRADIENT_STOPS: [(f32, &str); 2] = [
    (0.0, "rgba(241, 196, 15, 0.8)"),
    (1.0, "rgba(241, 196, 15, 0.1)"),
];

/// Full chart config minus the dataset background, which has to be a
/// canvas gradient and is attached by the caller.
pub fn hero_chart_config() -> Value {
    json!({
        "type": "line",
        "data": {
            "labels": HERO_LABELS,
            "datasets": [{
                "label": "Investment Growth",
                "data": HERO_DATA,
                "borderColor": "#f1c40f",
                "borderWidth": 3,
                "fill": true,
                "tension": 0.4,
                "pointBackgroundColor": "#f1c40f",
                "pointBorderColor": "#ffffff",
                "pointBorderWidth": 2,
                "pointRadius": 6,
                "pointHoverRadius": 8
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": { "legend": { "display": false } },
            "scales": {
                "x": { "display": false },
                "y": { "display": false }
            },
            "elements": { "point": { "hoverRadius": 8 } },
            "animation": { "duration": 2000, "easing": "easeOutQuart" }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_has_six_points() {
        let config = hero_chart_config();
        let dataset = &config["data"]["datasets"][0];
        assert_eq!(dataset["data"].as_array().map(Vec::len), Some(6));
        assert_eq!(config["data"]["labels"][5], "Jun");
        assert_eq!(config["options"]["plugins"]["legend"]["display"], false);
    }
}
