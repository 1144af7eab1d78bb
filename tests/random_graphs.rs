//! Randomized stress: arbitrary graphs (self-edges, back-edges, diamonds)
//! must terminate within the budget, stay within the stated recursion depth,
//! and render identically on repeated walks.

use oorandom::Rand32;
use std::cell::RefCell;
use std::rc::Rc;

use SceneSnap::model::{Inspect, Member, Value};
use SceneSnap::snapshot::SnapshotDocument;
use SceneSnap::walk::GraphWalker;

struct RandNode {
    id: u32,
    edges: RefCell<Vec<Rc<RandNode>>>,
}

impl Inspect for RandNode {
    fn type_name(&self) -> String {
        "RandNode".to_string()
    }
    fn members(&self) -> Vec<Member> {
        let mut members = vec![Member::ok("id", Value::UInt(self.id as u64))];
        for (i, edge) in self.edges.borrow().iter().enumerate() {
            members.push(Member::ok(format!("edge{}", i), Value::object(edge.clone())));
        }
        members
    }
}

fn random_graph(rng: &mut Rand32) -> Rc<RandNode> {
    let n = 12 + (rng.rand_u32() % 20) as usize;
    let nodes: Vec<Rc<RandNode>> = (0..n)
        .map(|i| {
            Rc::new(RandNode {
                id: i as u32,
                edges: RefCell::new(Vec::new()),
            })
        })
        .collect();

    for node in &nodes {
        let degree = (rng.rand_u32() % 4) as usize;
        for _ in 0..degree {
            let target = (rng.rand_u32() as usize) % n;
            // Self-edges and back-edges are the point of the exercise.
            node.edges.borrow_mut().push(nodes[target].clone());
        }
    }
    nodes[0].clone()
}

fn walk_to_string(walker: &GraphWalker, root: &Rc<RandNode>) -> String {
    let mut doc = SnapshotDocument::new(4);
    walker.walk_value(&mut doc, 0, "root", &Value::object(root.clone()));
    doc.into_string()
}

#[test]
fn random_graphs_terminate_and_render_deterministically() {
    const MAX_DEPTH: u32 = 4;
    const INDENT: usize = 4;

    for seed in 0..16u64 {
        let mut rng = Rand32::new(seed);
        let root = random_graph(&mut rng);

        let walker = GraphWalker::with_bounds(MAX_DEPTH, 3);
        let a = walk_to_string(&walker, &root);
        let b = walk_to_string(&walker, &root);
        assert_eq!(a, b, "seed {} not deterministic", seed);

        // Output stays bounded: at most 4 members per node, depth 4.
        assert!(
            a.lines().count() < 5_000,
            "seed {} produced {} lines",
            seed,
            a.lines().count()
        );

        // No line may sit deeper than the depth budget allows.
        for line in a.lines() {
            let indent = line.len() - line.trim_start_matches(' ').len();
            assert!(
                indent <= MAX_DEPTH as usize * INDENT,
                "seed {} exceeded recursion depth: {:?}",
                seed,
                line
            );
        }
    }
}
