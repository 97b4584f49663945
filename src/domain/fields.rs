//! Field table — Every Metric Read from `/api/status`
//!
//! Each exported metric is described by a [`FieldSpec`]: the name suffix
//! appended to [`METRICS_PREFIX`], the JSON path to descend, the help
//! text, and how the value found there is turned into a sample.
//!
//! Families of related fields (heap, load, OS memory, response times,
//! request counts) are enumerated by small enums carrying the JSON key
//! and name suffix, so the table is built rather than hand-written.

use std::sync::LazyLock;

use super::observation::METRICS_PREFIX;

/// Name of the repeated granular status metric.
pub const STATUSES_FIELD: &str = "statuses";

/// Path to the granular status list.
pub const STATUSES_PATH: [&str; 2] = ["status", "statuses"];

/// Help text of the granular status metric.
pub const STATUSES_HELP: &str =
    "OpenSearch dashboards granular state of plugins and core components";

/// How the value at a field's path becomes a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// A JSON number, exported unchanged.
    Number,
    /// A status object: labels mirror its keys, value is the health code.
    Health,
}

/// Static description of one extractable metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Name suffix, e.g. `heap_used`.
    pub field: String,
    /// Keys to descend from the document root.
    pub path: Vec<&'static str>,
    /// Help text.
    pub help: String,
    /// Value handling.
    pub encoding: Encoding,
}

impl FieldSpec {
    fn number(field: impl Into<String>, path: Vec<&'static str>, help: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            path,
            help: help.into(),
            encoding: Encoding::Number,
        }
    }

    /// Full exported metric name.
    pub fn metric_name(&self) -> String {
        format!("{METRICS_PREFIX}{}", self.field)
    }
}

/// V8 heap figures under `metrics.process.memory.heap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heap {
    Total,
    Used,
    Size,
}

impl Heap {
    pub const ALL: [Self; 3] = [Self::Total, Self::Used, Self::Size];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Total => "total_in_bytes",
            Self::Used => "used_in_bytes",
            Self::Size => "size_limit",
        }
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::Used => "used",
            Self::Size => "size",
        }
    }

    fn spec(self) -> FieldSpec {
        FieldSpec::number(
            format!("heap_{}", self.suffix()),
            vec!["metrics", "process", "memory", "heap", self.key()],
            format!("Opensearch dashboards memory heap {} in bytes", self.suffix()),
        )
    }
}

/// OS load average windows under `metrics.os.load`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadInterval {
    OneMinute,
    FiveMinutes,
    FifteenMinutes,
}

impl LoadInterval {
    pub const ALL: [Self; 3] = [Self::OneMinute, Self::FiveMinutes, Self::FifteenMinutes];

    /// The JSON key doubles as the name suffix.
    pub const fn key(self) -> &'static str {
        match self {
            Self::OneMinute => "1m",
            Self::FiveMinutes => "5m",
            Self::FifteenMinutes => "15m",
        }
    }

    fn spec(self) -> FieldSpec {
        FieldSpec::number(
            format!("load_{}", self.key()),
            vec!["metrics", "os", "load", self.key()],
            format!("OpenSearch dashboards load average {}", self.key()),
        )
    }
}

/// Host memory figures under `metrics.os.memory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsMemory {
    Total,
    Free,
    Used,
}

impl OsMemory {
    pub const ALL: [Self; 3] = [Self::Total, Self::Free, Self::Used];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Total => "total_in_bytes",
            Self::Free => "free_in_bytes",
            Self::Used => "used_in_bytes",
        }
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Total => "total",
            Self::Free => "free",
            Self::Used => "used",
        }
    }

    fn spec(self) -> FieldSpec {
        FieldSpec::number(
            format!("os_mem_{}", self.suffix()),
            vec!["metrics", "os", "memory", self.key()],
            format!("OpenSearch dashboards memory {} in bytes", self.suffix()),
        )
    }
}

/// Response time aggregates under `metrics.response_times`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseTime {
    Avg,
    Max,
}

impl ResponseTime {
    pub const ALL: [Self; 2] = [Self::Avg, Self::Max];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Avg => "avg_in_millis",
            Self::Max => "max_in_millis",
        }
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Avg => "avg",
            Self::Max => "max",
        }
    }

    fn spec(self) -> FieldSpec {
        FieldSpec::number(
            format!("resp_time_{}", self.suffix()),
            vec!["metrics", "response_times", self.key()],
            format!(
                "OpenSearch dashboards {} response time in milliseconds",
                self.suffix()
            ),
        )
    }
}

/// Request counters under `metrics.requests`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestCount {
    Disconnects,
    Total,
}

impl RequestCount {
    pub const ALL: [Self; 2] = [Self::Disconnects, Self::Total];

    /// The JSON key doubles as the name suffix.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Disconnects => "disconnects",
            Self::Total => "total",
        }
    }

    fn spec(self) -> FieldSpec {
        FieldSpec::number(
            format!("req_{}", self.key()),
            vec!["metrics", "requests", self.key()],
            format!("OpenSearch dashboards request {} count", self.key()),
        )
    }
}

static FIELD_SPECS: LazyLock<Vec<FieldSpec>> = LazyLock::new(build_field_specs);

/// The full field table, built once per process.
pub fn field_specs() -> &'static [FieldSpec] {
    &FIELD_SPECS
}

fn build_field_specs() -> Vec<FieldSpec> {
    let mut specs = vec![
        FieldSpec {
            field: "status".to_string(),
            path: vec!["status", "overall"],
            help: "General state of the dashboards cluster".to_string(),
            encoding: Encoding::Health,
        },
        FieldSpec::number(
            "current_connections",
            vec!["metrics", "concurrent_connections"],
            "OpenSearch dashboards number of concurrent connections",
        ),
        FieldSpec::number(
            "up_time",
            vec!["metrics", "process", "uptime_in_millis"],
            "OpenSearch dashboards up time in milliseconds",
        ),
        FieldSpec::number(
            "event_loop_delay",
            vec!["metrics", "process", "event_loop_delay"],
            "Opensearch dashboards event loop delay in milliseconds",
        ),
    ];

    specs.extend(Heap::ALL.map(Heap::spec));
    specs.push(FieldSpec::number(
        "re_set_size",
        vec!["metrics", "process", "memory", "resident_set_size_in_bytes"],
        "Opensearch dashboards resident set size in bytes",
    ));
    specs.extend(LoadInterval::ALL.map(LoadInterval::spec));
    specs.extend(OsMemory::ALL.map(OsMemory::spec));
    specs.extend(ResponseTime::ALL.map(ResponseTime::spec));
    specs.extend(RequestCount::ALL.map(RequestCount::spec));
    specs
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_table_names_in_order() {
        let names: Vec<&str> = field_specs().iter().map(|s| s.field.as_str()).collect();
        assert_eq!(
            names,
            [
                "status",
                "current_connections",
                "up_time",
                "event_loop_delay",
                "heap_total",
                "heap_used",
                "heap_size",
                "re_set_size",
                "load_1m",
                "load_5m",
                "load_15m",
                "os_mem_total",
                "os_mem_free",
                "os_mem_used",
                "resp_time_avg",
                "resp_time_max",
                "req_disconnects",
                "req_total",
            ]
        );
    }

    #[test]
    fn test_names_are_unique_and_prefixed() {
        let names: HashSet<String> = field_specs().iter().map(FieldSpec::metric_name).collect();
        assert_eq!(names.len(), field_specs().len());
        assert!(names.iter().all(|n| n.starts_with("opensearch_dashboards_")));
        assert!(!names.contains(&format!("{METRICS_PREFIX}{STATUSES_FIELD}")));
    }

    #[test]
    fn test_only_overall_status_is_health_encoded() {
        let health: Vec<&FieldSpec> = field_specs()
            .iter()
            .filter(|s| s.encoding == Encoding::Health)
            .collect();
        assert_eq!(health.len(), 1);
        assert_eq!(health[0].path, ["status", "overall"]);
    }

    #[test]
    fn test_grouped_paths_and_help() {
        let heap_size = Heap::Size.spec();
        assert_eq!(heap_size.metric_name(), "opensearch_dashboards_heap_size");
        assert_eq!(
            heap_size.path,
            ["metrics", "process", "memory", "heap", "size_limit"]
        );
        assert_eq!(heap_size.help, "Opensearch dashboards memory heap size in bytes");

        let load = LoadInterval::FifteenMinutes.spec();
        assert_eq!(load.field, "load_15m");
        assert_eq!(load.help, "OpenSearch dashboards load average 15m");

        let resp = ResponseTime::Max.spec();
        assert_eq!(resp.path, ["metrics", "response_times", "max_in_millis"]);
        assert_eq!(
            resp.help,
            "OpenSearch dashboards max response time in milliseconds"
        );

        let req = RequestCount::Disconnects.spec();
        assert_eq!(req.help, "OpenSearch dashboards request disconnects count");
    }
}
