use perflog_studio::aggregator::metrics::{calculate_cost_stats, hottest_buckets};
use perflog_studio::aggregator::{build_cost_table, CostEntry, CostTable};
use perflog_studio::parser::parse_log;
use pretty_assertions::assert_eq;

#[test]
fn test_traversal_follows_first_seen_order() {
    let mut table = CostTable::new();
    table.insert("B", "y", 1);
    table.insert("A", "default", 2);
    table.insert("B", "x", 3);
    table.insert("B", "y", 4);
    table.insert("A", "default", 5);

    let triples: Vec<(&str, &str, u32)> = table
        .samples()
        .map(|e| (e.function, e.parameter, e.cost))
        .collect();

    assert_eq!(
        triples,
        vec![
            ("B", "y", 1),
            ("B", "y", 4),
            ("B", "x", 3),
            ("A", "default", 2),
            ("A", "default", 5),
        ]
    );
}

#[test]
fn test_e2e_aggregation() {
    let parsed = parse_log(vec![
        "CMainFrame.OnCreate:[35996247]",
        "    Page.DataReady:[65535.36866.35997371]",
        "        [35997371]",
        "    [35997417]",
    ])
    .unwrap();
    let table = build_cost_table(&parsed.records);

    let on_create = table.function("CMainFrame.OnCreate").unwrap();
    assert_eq!(on_create.bucket("default").unwrap().samples(), &[1170]);

    let data_ready = table.function("Page.DataReady").unwrap();
    assert_eq!(data_ready.bucket("65535.36866").unwrap().samples(), &[0]);

    assert_eq!(table.sample_count(), 2);
}

#[test]
fn test_samples_yields_each_triple_once() {
    let mut table = CostTable::new();
    table.insert("F", "p", 7);

    let mut samples = table.samples();
    assert_eq!(
        samples.next(),
        Some(CostEntry {
            function: "F",
            parameter: "p",
            cost: 7
        })
    );
    assert_eq!(samples.next(), None);
}

#[test]
fn test_stats_and_hot_buckets() {
    let mut table = CostTable::new();
    table.insert("Paint", "default", 5);
    table.insert("Paint", "default", 15);
    table.insert("Load", "1.1", 100);

    let hot = hottest_buckets(&table, |_| true, 10);
    assert_eq!(hot[0].function, "Load");
    assert_eq!(hot[1].stats, calculate_cost_stats(&[5, 15]));
    assert_eq!(hot[1].stats.mean, 10.0);
}
