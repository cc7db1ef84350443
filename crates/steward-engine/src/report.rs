//! Tabular rendering of run outcomes.

use std::fmt;

use steward_core::ResponseType;

use crate::stats::Summary;

/// Cache effectiveness over the non-rejected completed set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheReport {
    /// Completed requests holding a fresh cache hit at completion.
    pub hits: usize,
    /// Completed requests that observed any cache entry at all.
    pub entries: usize,
    /// Non-rejected completed requests.
    pub total: usize,
}

impl CacheReport {
    fn ratio(numerator: usize, denominator: usize) -> f64 {
        if denominator == 0 {
            0.0
        } else {
            numerator as f64 / denominator as f64
        }
    }
}

/// Rendered summary of an experiment run: one row for "all" plus one
/// per response type, and cache-hit rates when caching is enabled.
#[derive(Clone, Debug)]
pub struct Report {
    pub(crate) all: Summary,
    pub(crate) by_type: Vec<(ResponseType, Summary)>,
    pub(crate) cache: Option<CacheReport>,
}

impl Report {
    /// The aggregate over every completed request.
    pub fn all(&self) -> &Summary {
        &self.all
    }

    /// The aggregate for one response type, zeros if none completed
    /// with that type.
    pub fn for_type(&self, response_type: ResponseType) -> Summary {
        self.by_type
            .iter()
            .find(|(t, _)| *t == response_type)
            .map(|(_, s)| *s)
            .unwrap_or_default()
    }

    /// Cache effectiveness, present iff `ttl > 0`.
    pub fn cache(&self) -> Option<&CacheReport> {
        self.cache.as_ref()
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, label: &str, s: &Summary) -> fmt::Result {
    writeln!(
        f,
        "{label:>9} {count:>5} {qos:>6.2} {tries:>6.1} {latency:>6.1} {q1:>6.1} {q2:>6.1} {dep:>6.1}",
        count = s.count,
        qos = s.qos,
        tries = s.tries,
        latency = s.latency,
        q1 = s.q1_wait,
        q2 = s.q2_wait,
        dep = s.dependency_time,
    )
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(57);
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "{:>9} {:>5} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6}",
            "type", "count", "qos", "tries", "time", "q1", "q2", "dep"
        )?;
        writeln!(f, "{rule}")?;
        write_row(f, "all", &self.all)?;
        for (response_type, summary) in &self.by_type {
            write_row(f, response_type.label(), summary)?;
        }
        if let Some(cache) = &self.cache {
            writeln!(f)?;
            writeln!(
                f,
                "cache hits {}/{} = {:.2}",
                cache.hits,
                cache.total,
                CacheReport::ratio(cache.hits, cache.total)
            )?;
            writeln!(
                f,
                "   entries {}/{} = {:.2}",
                cache.entries,
                cache.total,
                CacheReport::ratio(cache.entries, cache.total)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> Report {
        Report {
            all: Summary {
                count: 10,
                qos: 0.5,
                tries: 1.0,
                latency: 12.0,
                q1_wait: 1.0,
                q2_wait: 2.0,
                dependency_time: 9.0,
            },
            by_type: ResponseType::ALL
                .into_iter()
                .map(|t| (t, Summary::default()))
                .collect(),
            cache: Some(CacheReport {
                hits: 3,
                entries: 6,
                total: 10,
            }),
        }
    }

    #[test]
    fn renders_every_row() {
        let text = sample_report().to_string();
        for label in ["all", "rejected", "cached", "live", "fallback"] {
            assert!(text.contains(label), "missing row {label}");
        }
        assert!(text.contains("cache hits 3/10 = 0.30"));
        assert!(text.contains("entries 6/10 = 0.60"));
    }

    #[test]
    fn no_cache_section_without_ttl() {
        let mut report = sample_report();
        report.cache = None;
        assert!(!report.to_string().contains("cache hits"));
    }

    #[test]
    fn ratio_of_empty_set_is_zero() {
        assert_eq!(CacheReport::ratio(0, 0), 0.0);
    }
}
