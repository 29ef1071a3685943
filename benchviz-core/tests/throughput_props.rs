use benchviz_core::{DerivedMetric, Measurement, SizeKind, ThroughputUnit};
use proptest::prelude::*;

fn rel_eq(a: f64, b: f64) -> bool { (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1e-12) }

proptest! {
    #[test]
    fn bytes_throughput_is_bytes_per_nanosecond(latency in 0.01f64..1e9, size in 0u64..1 << 32) {
        let d = DerivedMetric::derive(&Measurement { mean_latency_ns: latency, size: SizeKind::Bytes(size) }, 450_000);
        prop_assert!(rel_eq(d.throughput, size as f64 / latency));
        prop_assert_eq!(d.unit, ThroughputUnit::GigabytesPerSecond);
        prop_assert_eq!(d.latency_ns, latency);
    }

    #[test]
    fn elements_throughput_is_millions_per_second(latency in 0.01f64..1e9, count in 0u64..1 << 32) {
        let d = DerivedMetric::derive(&Measurement { mean_latency_ns: latency, size: SizeKind::Elements(Some(count)) }, 450_000);
        prop_assert!(rel_eq(d.throughput, count as f64 / (latency / 1000.0)));
        prop_assert_eq!(d.unit, ThroughputUnit::MillionItemsPerSecond);
    }

    #[test]
    fn fallback_matches_explicit_count(latency in 0.01f64..1e9, fallback in 1u64..10_000_000) {
        let implicit = DerivedMetric::derive(&Measurement { mean_latency_ns: latency, size: SizeKind::Elements(None) }, fallback);
        let explicit = DerivedMetric::derive(&Measurement { mean_latency_ns: latency, size: SizeKind::Elements(Some(fallback)) }, 1);
        prop_assert_eq!(implicit, explicit);
    }
}
