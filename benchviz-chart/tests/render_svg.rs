use benchviz_chart::{draw_report, render_to_string, FigureLayout};
use benchviz_core::fixtures::ArtifactTree;
use benchviz_core::{build, hash_report, map_report, ArtifactLocator, ReportSpec, Selection};
use std::fs;

fn layout_for(spec: &ReportSpec, root: &std::path::Path) -> FigureLayout {
    ArtifactTree::new(root).populate(spec, |imp, case| (imp.name.len() + case.len()) as f64).unwrap();
    let result = build(spec, &ArtifactLocator::new(root, Selection::Lexicographic)).unwrap();
    FigureLayout::plan(spec, &result).unwrap()
}

#[test]
fn hash_figure_contains_titles_and_labels() {
    let dir = tempfile::tempdir().unwrap();
    let svg = render_to_string(&layout_for(&hash_report(), dir.path())).unwrap();

    assert!(svg.contains("<svg"));
    assert!(svg.contains("width=\"3600\""));
    for needle in ["Latency (byte stream)", "Throughput (byte stream)", "Latency (u64 optimised)", "Throughput (u64 optimised)", "Input size (bytes)", "rapidhash", "seahash", "4096"] {
        assert!(svg.contains(needle), "missing {needle}");
    }
}

#[test]
fn bar_labels_render_in_roster_order_in_every_panel() {
    let dir = tempfile::tempdir().unwrap();
    let svg = render_to_string(&layout_for(&map_report(), dir.path())).unwrap();

    let labels = ["rapidhash", "default", "fxhash", "gxhash", "wyhash"];
    for label in labels {
        assert_eq!(svg.matches(&format!(">{label}")).count(), 4, "{label}");
    }
    let first: Vec<usize> = labels.iter().map(|l| svg.find(&format!(">{l}")).unwrap()).collect();
    assert!(first.windows(2).all(|w| w[0] < w[1]), "{first:?}");

    // Labels start at the axis and run downwards, away from the bars.
    let tag_start = svg[..first[2]].rfind("<text").unwrap();
    let tag = &svg[tag_start..first[2]];
    assert!(tag.contains("text-anchor=\"start\""), "{tag}");
    assert!(tag.contains("rotate(90"), "{tag}");
}

#[test]
fn draw_report_writes_and_replaces_the_file() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let spec = map_report();
    let target = out.path().join("bench_insert.svg");
    fs::write(&target, "stale").unwrap();

    ArtifactTree::new(data.path()).populate(&spec, |_, _| 250.0).unwrap();
    let result = build(&spec, &ArtifactLocator::new(data.path(), Selection::Lexicographic)).unwrap();
    let path = draw_report(&spec, &result, out.path()).unwrap();

    assert_eq!(path, target);
    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("Throughput (structs)"));
    assert!(svg.contains("M Items/s"));
    assert!(!svg.contains("stale"));
    let leftovers: Vec<_> = fs::read_dir(out.path()).unwrap().map(|e| e.unwrap().file_name()).collect();
    assert_eq!(leftovers.len(), 1);
}

#[test]
fn output_dir_is_created() {
    let data = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let nested = out.path().join("reports/latest");
    let layout = layout_for(&hash_report(), data.path());
    let path = benchviz_chart::render(&layout, &nested).unwrap();
    assert!(path.ends_with("reports/latest/bench_hash.svg"));
    assert!(path.is_file());
}

#[test]
fn incomplete_layout_is_rejected() {
    let data = tempfile::tempdir().unwrap();
    let mut layout = layout_for(&map_report(), data.path());
    layout.panels.pop();
    assert!(render_to_string(&layout).is_err());
}
