use crate::core::analytics::AnalyticsEvent;

/// Navigation timing marks, in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageTimings {
    pub navigation_start: f64,
    pub dom_content_loaded_end: f64,
    pub load_event_end: f64,
}

impl PageTimings {
    pub fn page_load_ms(&self) -> f64 {
        (self.load_event_end - self.navigation_start).round()
    }

    pub fn dom_ready_ms(&self) -> f64 {
        (self.dom_content_loaded_end - self.navigation_start).round()
    }

    pub fn events(&self) -> [AnalyticsEvent; 2] {
        [
            AnalyticsEvent::new("Performance", "Page Load Time", self.page_load_ms().to_string()),
            AnalyticsEvent::new("Performance", "DOM Ready Time", self.dom_ready_ms().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_rounded_durations() {
        let timings = PageTimings {
            navigation_start: 1_000.0,
            dom_content_loaded_end: 1_412.4,
            load_event_end: 2_250.6,
        };
        let [load, ready] = timings.events();
        assert_eq!(load.label, "1251");
        assert_eq!(ready.label, "412");
        assert_eq!(ready.action, "DOM Ready Time");
    }
}
