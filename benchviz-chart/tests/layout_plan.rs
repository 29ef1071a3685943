use benchviz_chart::{FigureLayout, Panel};
use benchviz_core::fixtures::{ArtifactTree, Throughput, ARTIFACT_NAME};
use benchviz_core::{build, hash_report, map_report, ArtifactLocator, Selection};

fn built(spec: &benchviz_core::ReportSpec, latency: impl Fn(&benchviz_core::Implementation, &str) -> f64) -> (tempfile::TempDir, benchviz_core::ReportResult) {
    let dir = tempfile::tempdir().unwrap();
    let tree = ArtifactTree::new(dir.path());
    tree.populate(spec, latency).unwrap();
    let result = build(spec, &ArtifactLocator::new(dir.path(), Selection::Lexicographic)).unwrap();
    (dir, result)
}

#[test]
fn line_series_are_drawn_in_reverse_roster_order() {
    let spec = hash_report();
    let (_dir, result) = built(&spec, |_, _| 10.0);
    let layout = FigureLayout::plan(&spec, &result).unwrap();

    assert_eq!(layout.file_name, "bench_hash.svg");
    assert_eq!(layout.panels.len(), 4);
    let Panel::Line(latency) = &layout.panels[0] else { panic!("expected a line panel") };
    let labels: Vec<_> = latency.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels.first(), Some(&"xxhash"));
    assert_eq!(labels.last(), Some(&"rapidhash"));
    assert_eq!(latency.x_ticks, vec![2, 8, 16, 64, 256, 1024, 4096]);
    assert_eq!(latency.x_label.as_deref(), Some("Input size (bytes)"));
    assert!(latency.series.iter().all(|s| s.points.iter().all(|p| p.1 == 10.0)));

    // 4096 bytes in 10 ns.
    let Panel::Line(throughput) = &layout.panels[1] else { panic!("expected a line panel") };
    let last = throughput.series[0].points.last().copied().unwrap();
    assert_eq!(last, (4096.0, 409.6));

    assert!(matches!(layout.panels[2], Panel::Bar(_)));
    assert!(matches!(layout.panels[3], Panel::Bar(_)));
}

#[test]
fn bars_keep_declared_order_whatever_the_values() {
    let spec = map_report();
    let (_dir, result) = built(&spec, |imp, _| if imp.name == "wyhash" { 1.0 } else { 1000.0 });
    let layout = FigureLayout::plan(&spec, &result).unwrap();

    assert_eq!(layout.file_name, "bench_insert.svg");
    let titles: Vec<_> = layout.panels.iter().map(Panel::title).collect();
    assert_eq!(titles, ["Throughput (emails)", "Throughput (words)", "Throughput (u64)", "Throughput (structs)"]);
    for panel in &layout.panels {
        let Panel::Bar(bars) = panel else { panic!("expected a bar panel") };
        let labels: Vec<_> = bars.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["rapidhash", "default", "fxhash", "gxhash", "wyhash"]);
        assert_eq!(bars.y_label, "Throughput (M Items/s)");
    }
    // 450000 fallback elements in 1000 ns.
    let Panel::Bar(emails) = &layout.panels[0] else { unreachable!() };
    assert_eq!(emails.bars[0].value, 450_000.0);
    assert_eq!(emails.bars[4].value, 450_000_000.0);
}

#[test]
fn explicit_element_counts_are_used() {
    let spec = map_report();
    let dir = tempfile::tempdir().unwrap();
    let tree = ArtifactTree::new(dir.path());
    tree.populate(&spec, |_, _| 1000.0).unwrap();
    tree.write("map", "default", "10000_emails", "measurement_240601000000.cbor", 2000.0, Some(Throughput::Elements(Some(10_000)))).unwrap();
    assert!(ARTIFACT_NAME < "measurement_240601000000.cbor");

    let result = build(&spec, &ArtifactLocator::new(dir.path(), Selection::Lexicographic)).unwrap();
    let layout = FigureLayout::plan(&spec, &result).unwrap();
    let Panel::Bar(emails) = &layout.panels[0] else { panic!("expected a bar panel") };
    assert_eq!(emails.bars[1].value, 5000.0);
}

#[test]
fn mismatched_result_is_rejected() {
    let spec = map_report();
    let (_dir, result) = built(&spec, |_, _| 5.0);
    let err = FigureLayout::plan(&hash_report(), &result).unwrap_err();
    assert!(err.to_string().contains("cannot be drawn"));
}
