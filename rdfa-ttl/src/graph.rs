use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use itertools::Itertools;
use oxrdf::{SubjectRef, TermRef};
use scraper::ElementRef;

use crate::vocab::xsd;

/// A subject, or the target of a resource reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Node {
    Iri(String),
    /// The label, without the `_:` marker.
    Blank(String),
}

impl Node {
    pub fn iri(iri: impl Into<String>) -> Self {
        Node::Iri(iri.into())
    }

    pub fn blank(label: impl Into<String>) -> Self {
        Node::Blank(label.into())
    }

    /// Reads the textual form used by extractors, where any identifier
    /// starting with `_` names a blank node (`_:b0`, or the bare `_b0`).
    /// Both are written back as `_:b0`, the only form Turtle accepts.
    pub fn from_token(token: &str) -> Self {
        match token.strip_prefix('_') {
            Some(rest) => Node::Blank(rest.strip_prefix(':').unwrap_or(rest).to_string()),
            None => Node::Iri(token.to_string()),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank(_))
    }

    /// The IRI, or the blank node label.
    pub fn as_str(&self) -> &str {
        match self {
            Node::Iri(iri) => iri,
            Node::Blank(label) => label,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iri(iri) => write!(f, "<{iri}>"),
            Node::Blank(label) => write!(f, "_:{label}"),
        }
    }
}

impl From<SubjectRef<'_>> for Node {
    fn from(subject: SubjectRef<'_>) -> Self {
        match subject {
            SubjectRef::NamedNode(n) => Node::Iri(n.as_str().to_string()),
            SubjectRef::BlankNode(b) => Node::Blank(b.as_str().to_string()),
        }
    }
}

/// The lexical form of a typed literal.
///
/// `rdf:XMLLiteral` values are produced from markup, so they may be kept as
/// the sequence of serialized child nodes until they are written out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LexicalForm {
    Text(String),
    Fragment(Vec<String>),
}

impl LexicalForm {
    /// The flattened textual form.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            LexicalForm::Text(text) => Cow::Borrowed(text),
            LexicalForm::Fragment(nodes) => Cow::Owned(nodes.concat()),
        }
    }

    /// Serializes every child node of `element`, not including the element
    /// itself.
    pub fn from_element_children(element: ElementRef<'_>) -> Self {
        let nodes = element
            .children()
            .filter_map(|child| {
                if let Some(el) = ElementRef::wrap(child) {
                    Some(el.html())
                } else if let Some(text) = child.value().as_text() {
                    Some(escape_text(text))
                } else {
                    child
                        .value()
                        .as_comment()
                        .map(|comment| format!("<!--{}-->", &**comment))
                }
            })
            .collect();

        LexicalForm::Fragment(nodes)
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

impl From<String> for LexicalForm {
    fn from(text: String) -> Self {
        LexicalForm::Text(text)
    }
}

impl From<&str> for LexicalForm {
    fn from(text: &str) -> Self {
        LexicalForm::Text(text.to_string())
    }
}

/// The object of a triple.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Object {
    Resource(Node),
    PlainLiteral {
        value: String,
        language: Option<String>,
    },
    TypedLiteral {
        value: LexicalForm,
        datatype: String,
    },
    /// A value an extractor produced without a recognizable shape.
    /// Only the raw text survives.
    Malformed { raw: String },
}

impl Object {
    pub fn literal(value: impl Into<String>) -> Self {
        Object::PlainLiteral {
            value: value.into(),
            language: None,
        }
    }

    pub fn lang_literal(value: impl Into<String>, language: impl Into<String>) -> Self {
        Object::PlainLiteral {
            value: value.into(),
            language: Some(language.into()),
        }
    }

    pub fn typed_literal(value: impl Into<LexicalForm>, datatype: impl Into<String>) -> Self {
        Object::TypedLiteral {
            value: value.into(),
            datatype: datatype.into(),
        }
    }

    pub fn xml_literal(value: impl Into<LexicalForm>) -> Self {
        Object::typed_literal(value, crate::vocab::rdf::XML_LITERAL)
    }

    pub fn iri(iri: impl Into<String>) -> Self {
        Object::Resource(Node::Iri(iri.into()))
    }

    pub fn blank(label: impl Into<String>) -> Self {
        Object::Resource(Node::Blank(label.into()))
    }
}

impl From<Node> for Object {
    fn from(node: Node) -> Self {
        Object::Resource(node)
    }
}

impl From<TermRef<'_>> for Object {
    fn from(term: TermRef<'_>) -> Self {
        match term {
            TermRef::NamedNode(n) => Object::iri(n.as_str()),
            TermRef::BlankNode(b) => Object::blank(b.as_str()),
            TermRef::Literal(l) => match l.language() {
                Some(language) => Object::lang_literal(l.value(), language),
                None if l.datatype().as_str() == xsd::STRING => Object::literal(l.value()),
                None => Object::typed_literal(l.value(), l.datatype().as_str()),
            },
        }
    }
}

/// Predicates of one subject, each with its objects in insertion order.
pub type Predicates = IndexMap<String, Vec<Object>>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Triple {
    pub subject: Node,
    pub predicate: String,
    pub object: Object,
}

impl Triple {
    pub fn new(subject: Node, predicate: impl Into<String>, object: Object) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TripleRef<'a> {
    pub subject: &'a Node,
    pub predicate: &'a str,
    pub object: &'a Object,
}

/// An RDF graph as handed over by an extractor.
///
/// Subjects and predicates iterate in the order they were first added and
/// objects in the order they were added, so serializing a graph is
/// reproducible. Triples are not deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    subjects: IndexMap<Node, Predicates>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_triple(&mut self, subject: Node, predicate: impl Into<String>, object: Object) {
        self.subjects
            .entry(subject)
            .or_default()
            .entry(predicate.into())
            .or_default()
            .push(object);
    }

    pub fn subjects(&self) -> indexmap::map::Keys<'_, Node, Predicates> {
        self.subjects.keys()
    }

    /// Returns [`None`] for a subject that has no triples.
    pub fn triples_for_subject(&self, subject: &Node) -> Option<&Predicates> {
        self.subjects.get(subject)
    }

    pub fn iter(&self) -> impl Iterator<Item = TripleRef<'_>> {
        self.subjects.iter().flat_map(|(subject, predicates)| {
            predicates.iter().flat_map(move |(predicate, objects)| {
                objects.iter().map(move |object| TripleRef {
                    subject,
                    predicate: predicate.as_str(),
                    object,
                })
            })
        })
    }

    /// The number of triples, counting repeats.
    pub fn len(&self) -> usize {
        self.subjects
            .values()
            .flat_map(|predicates| predicates.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

impl Extend<Triple> for Graph {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        for triple in iter {
            self.add_triple(triple.subject, triple.predicate, triple.object);
        }
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        let mut graph = Graph::new();
        graph.extend(iter);
        graph
    }
}

/// `oxrdf` graphs have no insertion order, so triples are taken in the
/// lexical order of their N-Triples form.
impl From<&oxrdf::Graph> for Graph {
    fn from(graph: &oxrdf::Graph) -> Self {
        graph
            .iter()
            .sorted_by_cached_key(|t| {
                (
                    t.subject.to_string(),
                    t.predicate.to_string(),
                    t.object.to_string(),
                )
            })
            .map(|t| Triple::new(t.subject.into(), t.predicate.as_str(), t.object.into()))
            .collect()
    }
}
