use std::borrow::Cow;

use crate::graph::{Graph, Node, Object};
use crate::prefixes::{PrefixRegistry, UsedPrefixes};

/// How `"` is escaped inside literals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuoteEscaping {
    /// Only the first `"` of each literal is escaped; recorded harness
    /// fixtures depend on it.
    #[default]
    FirstOccurrence,
    /// Every `"` is escaped.
    All,
}

impl QuoteEscaping {
    pub fn escape(self, text: &str) -> Cow<'_, str> {
        if !text.contains('"') {
            return Cow::Borrowed(text);
        }

        match self {
            QuoteEscaping::FirstOccurrence => Cow::Owned(text.replacen('"', "\\\"", 1)),
            QuoteEscaping::All => Cow::Owned(text.replace('"', "\\\"")),
        }
    }
}

/// Something the serializer could not render faithfully.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum Diagnostic {
    #[display("Unrecognized object kind for {subject} <{predicate}>: {raw}")]
    UnrecognizedObjectKind {
        subject: Node,
        predicate: String,
        raw: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Serialization {
    pub turtle: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Writes a [`Graph`] as Turtle, one subject block at a time.
///
/// Each subject is followed by one line per (predicate, object) pair, and
/// every IRI in predicate or object position is compacted to a CURIE when
/// the registry knows its namespace. The `@prefix` lines for the namespaces
/// actually used are placed in front of the body.
#[derive(Clone, Copy, Debug)]
pub struct TurtleSerializer<'r> {
    registry: &'r PrefixRegistry,
    quote_escaping: QuoteEscaping,
}

impl Default for TurtleSerializer<'static> {
    fn default() -> Self {
        Self::new(PrefixRegistry::rdfa_initial_context())
    }
}

impl<'r> TurtleSerializer<'r> {
    pub fn new(registry: &'r PrefixRegistry) -> Self {
        Self {
            registry,
            quote_escaping: QuoteEscaping::default(),
        }
    }

    pub fn with_quote_escaping(self, quote_escaping: QuoteEscaping) -> Self {
        Self {
            quote_escaping,
            ..self
        }
    }

    pub fn registry(&self) -> &'r PrefixRegistry {
        self.registry
    }

    pub fn serialize(&self, graph: &Graph) -> String {
        self.serialize_with_diagnostics(graph).turtle
    }

    pub fn serialize_with_diagnostics(&self, graph: &Graph) -> Serialization {
        let mut used = UsedPrefixes::new();
        let mut diagnostics = Vec::new();
        let mut body = String::new();

        for subject in graph.subjects() {
            let Some(predicates) = graph.triples_for_subject(subject) else {
                continue;
            };

            tracing::trace!(%subject, predicates = predicates.len(), "serializing subject");
            write_node(&mut body, subject);
            body.push('\n');

            let last_predicate = predicates.len().saturating_sub(1);
            for (pi, (predicate, objects)) in predicates.iter().enumerate() {
                let last_object = objects.len().saturating_sub(1);
                for (oi, object) in objects.iter().enumerate() {
                    body.push_str("   ");
                    body.push_str(&self.iri_to_curie(predicate, &mut used));
                    body.push(' ');

                    if let Err(raw) = self.write_object(&mut body, object, &mut used) {
                        tracing::warn!(
                            %subject,
                            %predicate,
                            raw,
                            "unrecognized object kind, writing raw value"
                        );
                        diagnostics.push(Diagnostic::UnrecognizedObjectKind {
                            subject: subject.clone(),
                            predicate: predicate.clone(),
                            raw: raw.to_string(),
                        });
                    }

                    if pi == last_predicate && oi == last_object {
                        body.push_str(" .\n");
                    } else {
                        body.push_str(";\n");
                    }
                }
            }
        }

        let mut turtle = used.preamble();
        turtle.push('\n');
        turtle.push_str(&body);

        Serialization {
            turtle,
            diagnostics,
        }
    }

    /// Compacts `iri` with the first registry entry whose namespace starts
    /// it, recording that entry in `used`. IRIs without a match are written
    /// as `<iri>`.
    pub fn iri_to_curie(&self, iri: &str, used: &mut UsedPrefixes) -> String {
        match self.registry.find(iri) {
            Some((prefix, namespace, local)) => {
                used.record(prefix, namespace);
                format!("{prefix}:{local}")
            }
            None => format!("<{iri}>"),
        }
    }

    /// Fails with the raw value of an object that has no Turtle form, after
    /// writing that value unquoted.
    fn write_object<'o>(
        &self,
        out: &mut String,
        object: &'o Object,
        used: &mut UsedPrefixes,
    ) -> Result<(), &'o str> {
        match object {
            Object::PlainLiteral { value, language } => {
                let literal = self.quote_escaping.escape(value);
                let delimiter = if literal.contains('\n') { "\"\"\"" } else { "\"" };
                out.push_str(delimiter);
                out.push_str(&literal);
                out.push_str(delimiter);
                if let Some(language) = language {
                    out.push('@');
                    out.push_str(language);
                }
            }
            Object::Resource(node @ Node::Blank(_)) => write_node(out, node),
            Object::Resource(Node::Iri(iri)) => out.push_str(&self.iri_to_curie(iri, used)),
            // rdf:XMLLiteral values are flattened to their markup here too
            Object::TypedLiteral { value, datatype } => {
                let text = value.as_text();
                out.push('"');
                out.push_str(&self.quote_escaping.escape(&text));
                out.push('"');
                out.push_str("^^");
                out.push_str(&self.iri_to_curie(datatype, used));
            }
            Object::Malformed { raw } => {
                out.push_str(raw);
                return Err(raw.as_str());
            }
        }

        Ok(())
    }
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Iri(iri) => {
            out.push('<');
            out.push_str(iri);
            out.push('>');
        }
        Node::Blank(label) => {
            out.push_str("_:");
            out.push_str(label);
        }
    }
}
