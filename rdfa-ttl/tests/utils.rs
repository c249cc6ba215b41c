use itertools::Itertools;
use oxrdf::Graph;
use rdfa_ttl::{PrefixRegistry, TurtleSerializer};

#[allow(unused)]
pub fn serialize(graph: &rdfa_ttl::Graph) -> String {
    TurtleSerializer::new(PrefixRegistry::rdfa_initial_context()).serialize(graph)
}

#[allow(unused)]
pub fn parse_turtle(ttl: &str) -> Graph {
    let mut graph = Graph::new();
    for triple in oxttl::TurtleParser::new().for_slice(ttl.as_bytes()) {
        graph.insert(&triple.unwrap());
    }
    graph
}

/// N-Triples lines in a stable order, for comparing graphs without blank
/// nodes.
#[allow(unused)]
pub fn ntriples(graph: &Graph) -> Vec<String> {
    graph.iter().map(|t| t.to_string()).sorted().collect()
}
