//! EARL assertions, built as a [`Graph`] so that reports go through the
//! same serializer as extracted graphs.

use crate::graph::{Graph, Node, Object};
use crate::vocab::{earl, rdf};

#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
pub enum Outcome {
    #[display("passed")]
    Passed,
    #[display("failed")]
    Failed,
}

impl Outcome {
    /// A test passes when the validation query answers what the manifest
    /// expects, which is not always `true`.
    pub fn from_results(actual: bool, expected: bool) -> Self {
        if actual == expected {
            Outcome::Passed
        } else {
            Outcome::Failed
        }
    }

    pub fn iri(self) -> &'static str {
        match self {
            Outcome::Passed => earl::PASSED,
            Outcome::Failed => earl::FAILED,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assertion {
    /// Who ran the test, usually the harness.
    pub assertor: Node,
    /// The processor under test.
    pub subject: Node,
    pub test: Node,
    pub outcome: Outcome,
}

/// Collects assertions; each gets its own pair of blank nodes.
#[derive(Clone, Debug, Default)]
pub struct Report {
    graph: Graph,
    recorded: usize,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, assertion: &Assertion) {
        let n = self.recorded;
        self.recorded += 1;

        let node = Node::blank(format!("assertion{n}"));
        let result = Node::blank(format!("result{n}"));

        let graph = &mut self.graph;
        graph.add_triple(node.clone(), rdf::TYPE, Object::iri(earl::ASSERTION));
        graph.add_triple(node.clone(), earl::ASSERTED_BY, assertion.assertor.clone().into());
        graph.add_triple(node.clone(), earl::SUBJECT, assertion.subject.clone().into());
        graph.add_triple(node.clone(), earl::TEST, assertion.test.clone().into());
        graph.add_triple(node.clone(), earl::MODE, Object::iri(earl::AUTOMATIC));
        graph.add_triple(node, earl::RESULT, result.clone().into());
        graph.add_triple(result.clone(), rdf::TYPE, Object::iri(earl::TEST_RESULT));
        graph.add_triple(result, earl::OUTCOME, Object::iri(assertion.outcome.iri()));
    }

    pub fn len(&self) -> usize {
        self.recorded
    }

    pub fn is_empty(&self) -> bool {
        self.recorded == 0
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }
}
