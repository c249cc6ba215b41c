//! Graph model, Turtle/CURIE serializer and test-suite helpers for an RDFa
//! conformance harness.
//!
//! An RDFa extractor hands over a [`Graph`]; the [`TurtleSerializer`] turns it
//! into Turtle text, compacting IRIs against an ordered [`PrefixRegistry`].
//!
//! ```
//! use rdfa_ttl::{Graph, Node, Object, PrefixRegistry, TurtleSerializer};
//!
//! let mut graph = Graph::new();
//! graph.add_triple(
//!     Node::blank("b0"),
//!     "http://xmlns.com/foaf/0.1/name",
//!     Object::literal("Manu Sporny"),
//! );
//!
//! let turtle = TurtleSerializer::new(PrefixRegistry::rdfa_initial_context()).serialize(&graph);
//! assert_eq!(
//!     turtle,
//!     "@prefix foaf: <http://xmlns.com/foaf/0.1/> .\n\n_:b0\n   foaf:name \"Manu Sporny\" .\n"
//! );
//! ```

pub mod earl;
pub mod graph;
pub mod prefixes;
pub mod serializer;
pub mod suite;

pub use graph::{Graph, LexicalForm, Node, Object, Predicates, Triple, TripleRef};
pub use prefixes::{PrefixRegistry, UsedPrefixes};
pub use serializer::{Diagnostic, QuoteEscaping, Serialization, TurtleSerializer};

#[derive(derive_more::Error, derive_more::Display, derive_more::From, Debug)]
pub enum Error {
    #[display("IRI parse error: `{iri}`")]
    IriParseError {
        source: oxiri::IriParseError,
        iri: String,
    },

    #[display("Invalid prefix: the prefix '{prefix}' is reserved.")]
    #[from(skip)]
    ReservedPrefixError { prefix: String },

    #[display("Unknown host language: `{_0}`")]
    #[from(skip)]
    UnknownHostLanguage(#[error(not(source))] String),

    #[display("Unknown RDFa version: `{_0}`")]
    #[from(skip)]
    UnknownRdfaVersion(#[error(not(source))] String),
}

pub mod vocab {
    pub mod rdf {
        pub const NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
        pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
        pub const XML_LITERAL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#XMLLiteral";
    }

    pub mod xsd {
        pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    }

    pub mod earl {
        pub const NAMESPACE: &str = "http://www.w3.org/ns/earl#";
        pub const ASSERTION: &str = "http://www.w3.org/ns/earl#Assertion";
        pub const ASSERTED_BY: &str = "http://www.w3.org/ns/earl#assertedBy";
        pub const SUBJECT: &str = "http://www.w3.org/ns/earl#subject";
        pub const TEST: &str = "http://www.w3.org/ns/earl#test";
        pub const MODE: &str = "http://www.w3.org/ns/earl#mode";
        pub const AUTOMATIC: &str = "http://www.w3.org/ns/earl#automatic";
        pub const RESULT: &str = "http://www.w3.org/ns/earl#result";
        pub const TEST_RESULT: &str = "http://www.w3.org/ns/earl#TestResult";
        pub const OUTCOME: &str = "http://www.w3.org/ns/earl#outcome";
        pub const PASSED: &str = "http://www.w3.org/ns/earl#passed";
        pub const FAILED: &str = "http://www.w3.org/ns/earl#failed";
    }
}
