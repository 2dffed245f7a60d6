use std::{fmt, hash::Hash};

use arbitrary::{Arbitrary, Unstructured};

use crate::{
    core::{error::AddEdgeError, Weight},
    graph::Graph,
};

/// Position of a node in the insertion order, taken modulo the node count.
#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp<K, W> {
    AddNode(K),
    AddEdge(Index, Index, W),
    AddEdgeToNew(Index, K, W),
    SetPosition(Index, f64, f64),
}

#[derive(Debug, PartialEq)]
pub enum MutOpResult<K, W> {
    AddNode(bool),
    AddEdge(Result<(), AddEdgeError<K, W>>),
    SetPosition(bool),
    NoNodes,
}

impl<K, W> MutOp<K, W>
where
    K: Clone + Eq + Hash,
    W: Weight,
{
    pub fn apply(self, graph: &mut Graph<K, W>) -> MutOpResult<K, W> {
        let n = graph.node_count();
        let key = |graph: &Graph<K, W>, index: Index| {
            index.get(n).and_then(|i| graph.key_at(i)).cloned()
        };

        match self {
            MutOp::AddNode(node) => MutOpResult::AddNode(graph.add_node(node)),
            MutOp::AddEdge(from, to, weight) => match (key(graph, from), key(graph, to)) {
                (Some(from), Some(to)) => MutOpResult::AddEdge(graph.try_add_edge(from, to, weight)),
                _ => MutOpResult::NoNodes,
            },
            MutOp::AddEdgeToNew(from, to, weight) => match key(graph, from) {
                Some(from) => MutOpResult::AddEdge(graph.try_add_edge(from, to, weight)),
                None => MutOpResult::NoNodes,
            },
            MutOp::SetPosition(index, x, y) => match key(graph, index) {
                Some(node) => MutOpResult::SetPosition(graph.set_position(&node, (x, y)).is_ok()),
                None => MutOpResult::NoNodes,
            },
        }
    }
}

pub struct MutOpsSeq<K, W>(pub Vec<MutOp<K, W>>);

impl<K, W> IntoIterator for MutOpsSeq<K, W> {
    type Item = MutOp<K, W>;
    type IntoIter = std::vec::IntoIter<MutOp<K, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K, W> MutOpsSeq<K, W>
where
    K: Clone + Eq + Hash + fmt::Debug,
    W: Weight + fmt::Debug,
{
    /// Applies the operations while printing them as Rust code, which helps
    /// with turning a fuzzer crash into a regression test.
    pub fn replay(self, graph: &mut Graph<K, W>) {
        println!("let mut graph = Graph::new();");
        println!();

        for op in self {
            let n = graph.node_count();
            let key = |index: Index| index.get(n).and_then(|i| graph.key_at(i)).cloned();

            match &op {
                MutOp::AddNode(node) => println!("graph.add_node({node:?});"),
                MutOp::AddEdge(from, to, weight) => {
                    if let (Some(from), Some(to)) = (key(*from), key(*to)) {
                        println!("graph.try_add_edge({from:?}, {to:?}, {weight:?});");
                    }
                }
                MutOp::AddEdgeToNew(from, to, weight) => {
                    if let Some(from) = key(*from) {
                        println!("graph.try_add_edge({from:?}, {to:?}, {weight:?});");
                    }
                }
                MutOp::SetPosition(index, x, y) => {
                    if let Some(node) = key(*index) {
                        println!("graph.set_position(&{node:?}, ({x:?}, {y:?}));");
                    }
                }
            }

            op.apply(graph);
        }

        println!();
        println!("check_consistency(&graph).unwrap();");
    }
}

impl<K: fmt::Debug, W: fmt::Debug> fmt::Debug for MutOpsSeq<K, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")?;
        writeln!(f, ".replay(&mut graph);")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum OpKind {
    AddNode,
    AddEdge,
    AddEdgeToNew,
    SetPosition,
}

impl<'a, K, W> Arbitrary<'a> for MutOpsSeq<K, W>
where
    K: Arbitrary<'a>,
    W: Arbitrary<'a>,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let n_target = u.int_in_range(10..=200)?;
        let r = u.nice_f64()?;

        let m_target = (((n_target * (n_target - 1) / 2) as f64 * r).round() as usize).max(1);

        let mut n = 0usize;
        let mut m = 0usize;
        let mut seq = Vec::with_capacity(n_target);

        while !u.is_empty() {
            let rn = (n as f64 / n_target as f64).min(1.0);
            let rm = (m as f64 / m_target as f64).min(1.0);

            let op = match arbitrary_op(u, rn, rm) {
                Ok(op) => op,
                Err(_) => break,
            };

            match op {
                MutOp::AddNode(_) => n += 1,
                MutOp::AddEdge(_, _, _) => m += 1,
                MutOp::AddEdgeToNew(_, _, _) => {
                    n += 1;
                    m += 1;
                }
                MutOp::SetPosition(_, _, _) => {}
            }

            seq.push(op);
        }

        Ok(MutOpsSeq(seq))
    }
}

fn arbitrary_op<'a, K, W>(u: &mut Unstructured<'a>, rn: f64, rm: f64) -> arbitrary::Result<MutOp<K, W>>
where
    K: Arbitrary<'a>,
    W: Arbitrary<'a>,
{
    // The fuller the graph is, the less likely it is to grow further.
    let wn = 1.0 - rn * rn;
    let wm = 1.0 - rm * rm;

    u.choose_weighted(
        &[
            OpKind::AddNode,
            OpKind::AddEdge,
            OpKind::AddEdgeToNew,
            OpKind::SetPosition,
        ],
        &[wn.max(0.01), wm.max(0.01), (wn * wm).max(0.01), 0.05],
    )
    .and_then(|kind| match kind {
        OpKind::AddNode => Ok(MutOp::AddNode(u.arbitrary()?)),
        OpKind::AddEdge => Ok(MutOp::AddEdge(
            u.arbitrary()?,
            u.arbitrary()?,
            u.arbitrary()?,
        )),
        OpKind::AddEdgeToNew => Ok(MutOp::AddEdgeToNew(
            u.arbitrary()?,
            u.arbitrary()?,
            u.arbitrary()?,
        )),
        OpKind::SetPosition => Ok(MutOp::SetPosition(
            u.arbitrary()?,
            u.arbitrary()?,
            u.arbitrary()?,
        )),
    })
}

trait UnstructuredExt {
    fn nice_f64(&mut self) -> arbitrary::Result<f64>;
    fn choose_weighted<'b, T>(
        &mut self,
        choices: &'b [T],
        weights: &'b [f64],
    ) -> arbitrary::Result<&'b T>;
}

impl<'a> UnstructuredExt for Unstructured<'a> {
    // Uniform value in [0, 1].
    fn nice_f64(&mut self) -> arbitrary::Result<f64> {
        const RESOLUTION: u8 = 100;
        let int = self.int_in_range(0..=RESOLUTION)?;
        Ok(int as f64 / RESOLUTION as f64)
    }

    fn choose_weighted<'b, T>(
        &mut self,
        choices: &'b [T],
        weights: &'b [f64],
    ) -> arbitrary::Result<&'b T> {
        if choices.is_empty() || choices.len() != weights.len() {
            return Err(arbitrary::Error::EmptyChoose);
        }

        let weight_sum = weights.iter().copied().sum::<f64>();
        let bound = self.nice_f64()? * weight_sum;

        let mut acc = 0.0;
        for (choice, weight) in choices.iter().zip(weights.iter().copied()) {
            acc += weight;

            if acc >= bound {
                return Ok(choice);
            }
        }

        // Rounding errors in the accumulated sum.
        choices.last().ok_or(arbitrary::Error::EmptyChoose)
    }
}
