#![allow(dead_code)]

use std::sync::OnceLock;

use mcs_compat::{CompatibilityGraph, CorrespondenceNodes};

pub fn init_test_logger() {
    static INIT: OnceLock<()> = OnceLock::new();
    let _ = INIT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Assert that an invariant holds
#[macro_export]
macro_rules! assert_invariant {
    ($cond:expr, $invariant_name:expr) => {
        if !$cond {
            panic!(
                "Invariant violated: {}\nCondition: {}",
                $invariant_name,
                stringify!($cond)
            );
        }
    };
}

/// Atom pairs of every node, in id order.
pub fn atom_pairs(graph: &CompatibilityGraph) -> Vec<(u32, u32)> {
    graph
        .node_triples()
        .into_iter()
        .map(|(s, t, _)| (s.get(), t.get()))
        .collect()
}

/// Edges rewritten as sorted atom-pair pairs, so two graphs can be compared
/// independently of node numbering.
pub fn edge_set(graph: &CompatibilityGraph, c_edges: bool) -> Vec<((u32, u32), (u32, u32))> {
    let pairs = atom_pairs(graph);
    let edges = if c_edges {
        graph.c_edges()
    } else {
        graph.d_edges()
    };
    let mut out: Vec<_> = edges
        .iter()
        .map(|e| {
            let p = pairs[e.first.position()];
            let q = pairs[e.second.position()];
            if p <= q { (p, q) } else { (q, p) }
        })
        .collect();
    out.sort_unstable();
    out
}

/// Checks that no edge maps one atom twice and that ids name nodes.
pub fn assert_injective(graph: &CompatibilityGraph) {
    let pairs = atom_pairs(graph);
    for e in graph.c_edges().iter().chain(graph.d_edges()) {
        assert_invariant!(e.first < e.second, "edges are stored first < second");
        assert_invariant!(e.second.position() < pairs.len(), "edge ids name nodes");
        let (p, q) = (pairs[e.first.position()], pairs[e.second.position()]);
        assert_invariant!(p.0 != q.0, "source atoms differ");
        assert_invariant!(p.1 != q.1, "target atoms differ");
    }
}

pub fn is_fallback_form(graph: &CompatibilityGraph) -> bool {
    matches!(graph.nodes(), CorrespondenceNodes::Fallback(_))
}
