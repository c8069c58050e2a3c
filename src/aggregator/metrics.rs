//! Calculate cost statistics and hot buckets from the cost table.
//!
//! Hot buckets are the (function, parameter) combinations with the largest
//! total cost. These are the primary targets for optimization.

use super::cost_table::{CostTable, ParameterBucket};
use crate::parser::schema::CostStats;
use log::debug;

/// A (function, parameter) bucket ranked by total cost
///
/// **Public** - returned from hottest_buckets
#[derive(Debug, Clone, PartialEq)]
pub struct HotBucket {
    pub function: String,
    pub parameter: String,
    pub stats: CostStats,

    /// Share of all recorded ticks
    pub percentage: f64,
}

/// Calculate summary statistics for a slice of samples
///
/// **Public** - used by the JSON report and the text summary
pub fn calculate_cost_stats(samples: &[u32]) -> CostStats {
    if samples.is_empty() {
        return CostStats::default();
    }

    let total: u64 = samples.iter().map(|&s| s as u64).sum();
    let mut sorted = samples.to_vec();
    sorted.sort_unstable();

    CostStats {
        count: samples.len(),
        total,
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        mean: total as f64 / samples.len() as f64,
        // upper middle for even counts
        median: sorted[sorted.len() / 2],
    }
}

/// Rank buckets by total cost
///
/// **Public** - main entry point for metrics calculation
///
/// # Arguments
/// * `table` - Aggregated cost table
/// * `include` - Filter deciding which buckets take part
/// * `top_n` - Number of buckets to return
///
/// # Returns
/// Buckets sorted by total cost (descending). Ties keep table order.
pub fn hottest_buckets<F>(table: &CostTable, include: F, top_n: usize) -> Vec<HotBucket>
where
    F: Fn(&ParameterBucket) -> bool,
{
    let include = &include;
    let mut hot: Vec<HotBucket> = table
        .functions()
        .iter()
        .flat_map(|func| {
            func.buckets()
                .iter()
                .filter(move |b| include(*b))
                .map(move |bucket| HotBucket {
                    function: func.name().to_string(),
                    parameter: bucket.label().to_string(),
                    stats: calculate_cost_stats(bucket.samples()),
                    percentage: 0.0,
                })
        })
        .collect();

    let grand_total: u64 = hot.iter().map(|h| h.stats.total).sum();
    for bucket in &mut hot {
        bucket.percentage = if grand_total > 0 {
            (bucket.stats.total as f64 / grand_total as f64) * 100.0
        } else {
            0.0
        };
    }

    hot.sort_by(|a, b| b.stats.total.cmp(&a.stats.total));
    hot.truncate(top_n);

    debug!("Selected {} hot buckets", hot.len());

    hot
}

/// Render hot buckets as a text table
///
/// **Public** - used by the parse command's --summary flag
pub fn generate_text_summary(hot: &[HotBucket]) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "  {:<40} {:<20} {:>7} {:>12} {:>12} {:>10} {:>7}",
        "FUNCTION", "PARAMETER", "CALLS", "TOTAL", "MEAN", "MAX", "%"
    ));
    lines.push(format!("  {}", "-".repeat(114)));

    for bucket in hot {
        lines.push(format!(
            "  {:<40} {:<20} {:>7} {:>12} {:>12.1} {:>10} {:>6.1}%",
            truncate(&bucket.function, 40),
            truncate(&bucket.parameter, 20),
            bucket.stats.count,
            bucket.stats.total,
            bucket.stats.mean,
            bucket.stats.max,
            bucket.percentage
        ));
    }

    if hot.is_empty() {
        lines.push("  (no records)".to_string());
    }

    lines.join("\n")
}

/// Keep the tail of long names for display
fn truncate(value: &str, width: usize) -> String {
    let count = value.chars().count();
    if count <= width {
        return value.to_string();
    }
    let tail: String = value.chars().skip(count - (width - 3)).collect();
    format!("...{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_cost_stats() {
        let stats = calculate_cost_stats(&[30, 10, 20, 40]);
        assert_eq!(stats.count, 4);
        assert_eq!(stats.total, 100);
        assert_eq!(stats.min, 10);
        assert_eq!(stats.max, 40);
        assert_eq!(stats.mean, 25.0);
        assert_eq!(stats.median, 30);
    }

    #[test]
    fn test_median_odd_count() {
        assert_eq!(calculate_cost_stats(&[5, 1, 3]).median, 3);
    }

    #[test]
    fn test_cost_stats_total_does_not_wrap() {
        let stats = calculate_cost_stats(&[u32::MAX, u32::MAX]);
        assert_eq!(stats.total, 2 * u32::MAX as u64);
    }

    #[test]
    fn test_cost_stats_empty() {
        assert_eq!(calculate_cost_stats(&[]), CostStats::default());
    }

    #[test]
    fn test_hottest_buckets() {
        let mut table = CostTable::new();
        table.insert("Small", "default", 10);
        table.insert("Big", "1", 500);
        table.insert("Big", "2", 300);
        table.insert("Small", "default", 190);

        let hot = hottest_buckets(&table, |_| true, 2);

        assert_eq!(hot.len(), 2);
        assert_eq!(hot[0].function, "Big");
        assert_eq!(hot[0].parameter, "1");
        assert_eq!(hot[0].percentage, 50.0);
        assert_eq!(hot[1].parameter, "2");
    }

    #[test]
    fn test_hottest_buckets_filter() {
        let mut table = CostTable::new();
        table.insert("A", "default", 100);
        table.insert("A", "x", 1);

        let hot = hottest_buckets(&table, |b| b.label() != "default", 10);
        assert_eq!(hot.len(), 1);
        assert_eq!(hot[0].percentage, 100.0);
    }

    #[test]
    fn test_text_summary_truncates() {
        let hot = vec![HotBucket {
            function: "N".repeat(60),
            parameter: "default".to_string(),
            stats: calculate_cost_stats(&[5]),
            percentage: 100.0,
        }];

        let text = generate_text_summary(&hot);
        assert!(text.contains("..."));
        assert!(text.contains("default"));
    }
}
