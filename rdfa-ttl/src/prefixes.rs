use indexmap::IndexMap;

use crate::Error;

/// An ordered table of well-known namespaces.
///
/// CURIE compaction takes the *first* entry whose namespace is a prefix of
/// the IRI, so the order entries were added in is part of the output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrefixRegistry {
    entries: IndexMap<String, String>,
}

impl PrefixRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The vocabulary prefixes of the RDFa 1.1 initial context, in
    /// declaration order. The default (empty) prefix is not included.
    pub fn rdfa_initial_context() -> &'static PrefixRegistry {
        static INITIAL_CONTEXT: std::sync::OnceLock<PrefixRegistry> = std::sync::OnceLock::new();
        // https://www.w3.org/2011/rdfa-context/rdfa-1.1
        INITIAL_CONTEXT.get_or_init(|| RDFA_INITIAL_CONTEXT.iter().copied().collect())
    }

    /// The RDFa 1.1 initial context preceded by the vocabularies used in
    /// test manifests and EARL reports.
    pub fn earl() -> &'static PrefixRegistry {
        static EARL: std::sync::OnceLock<PrefixRegistry> = std::sync::OnceLock::new();
        EARL.get_or_init(|| {
            [
                ("earl", "http://www.w3.org/ns/earl#"),
                ("doap", "http://usefulinc.com/ns/doap#"),
                ("test", "http://www.w3.org/2006/03/test-description#"),
                ("rdfatest", "http://rdfa.info/vocabs/rdfa-test#"),
            ]
            .into_iter()
            .chain(RDFA_INITIAL_CONTEXT.iter().copied())
            .collect()
        })
    }

    /// Appends a mapping. Redefining a prefix replaces its namespace but
    /// keeps its position.
    pub fn with_prefix(mut self, prefix: impl Into<String>, namespace: impl Into<String>) -> Self {
        self.insert(prefix, namespace);
        self
    }

    pub fn insert(
        &mut self,
        prefix: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(prefix.into(), namespace.into())
    }

    pub fn mappings(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(prefix, namespace)| (prefix.as_str(), namespace.as_str()))
    }

    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.entries.get(prefix).map(String::as_str)
    }

    /// The first entry whose namespace starts `iri`, with the rest of `iri`.
    pub fn find<'i>(&self, iri: &'i str) -> Option<(&str, &str, &'i str)> {
        self.mappings().find_map(|(prefix, namespace)| {
            iri.strip_prefix(namespace)
                .map(|local| (prefix, namespace, local))
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds the equivalent [`curie::PrefixMapping`], for expanding CURIEs
    /// back into IRIs.
    pub fn to_prefix_mapping(&self) -> Result<curie::PrefixMapping, Error> {
        let mut mapping = curie::PrefixMapping::default();
        for (prefix, namespace) in self.mappings() {
            mapping
                .add_prefix(prefix, namespace)
                .map_err(|_| Error::ReservedPrefixError {
                    prefix: prefix.to_string(),
                })?;
        }
        Ok(mapping)
    }
}

impl<P: Into<String>, N: Into<String>> FromIterator<(P, N)> for PrefixRegistry {
    fn from_iter<T: IntoIterator<Item = (P, N)>>(iter: T) -> Self {
        let mut registry = PrefixRegistry::new();
        for (prefix, namespace) in iter {
            // first declaration wins
            registry
                .entries
                .entry(prefix.into())
                .or_insert_with(|| namespace.into());
        }
        registry
    }
}

/// The prefixes a single serialization has compacted IRIs with, in the
/// order they were first used.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsedPrefixes {
    prefixes: IndexMap<String, String>,
}

impl UsedPrefixes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, prefix: &str, namespace: &str) {
        if !self.prefixes.contains_key(prefix) {
            self.prefixes
                .insert(prefix.to_string(), namespace.to_string());
        }
    }

    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.prefixes.contains_key(prefix)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes
            .iter()
            .map(|(prefix, namespace)| (prefix.as_str(), namespace.as_str()))
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// One `@prefix` line per used prefix.
    pub fn preamble(&self) -> String {
        let mut out = String::new();
        for (prefix, namespace) in self.iter() {
            out.push_str("@prefix ");
            out.push_str(prefix);
            out.push_str(": <");
            out.push_str(namespace);
            out.push_str("> .\n");
        }
        out
    }
}

static RDFA_INITIAL_CONTEXT: &[(&str, &str)] = &[
    // W3C documents
    ("as", "https://www.w3.org/ns/activitystreams#"),
    ("csvw", "http://www.w3.org/ns/csvw#"),
    ("dcat", "http://www.w3.org/ns/dcat#"),
    ("dqv", "http://www.w3.org/ns/dqv#"),
    ("duv", "http://www.w3.org/ns/duv#"),
    ("grddl", "http://www.w3.org/2003/g/data-view#"),
    ("jsonld", "http://json-ld.org/vocab#"),
    ("ma", "http://www.w3.org/ns/ma-ont#"),
    ("org", "http://www.w3.org/ns/org#"),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("prov", "http://www.w3.org/ns/prov#"),
    ("qb", "http://purl.org/linked-data/cube#"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("rdfa", "http://www.w3.org/ns/rdfa#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("rif", "http://www.w3.org/2007/rif#"),
    ("rr", "http://www.w3.org/ns/r2rml#"),
    ("sd", "http://www.w3.org/ns/sparql-service-description#"),
    ("skos", "http://www.w3.org/2004/02/skos/core#"),
    ("skosxl", "http://www.w3.org/2008/05/skos-xl#"),
    ("sosa", "http://www.w3.org/ns/sosa/"),
    ("ssn", "http://www.w3.org/ns/ssn/"),
    ("time", "http://www.w3.org/2006/time#"),
    ("void", "http://rdfs.org/ns/void#"),
    ("wdr", "http://www.w3.org/2007/05/powder#"),
    ("wdrs", "http://www.w3.org/2007/05/powder-s#"),
    ("xhv", "http://www.w3.org/1999/xhtml/vocab#"),
    ("xml", "http://www.w3.org/XML/1998/namespace"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
    // "widely used"
    ("cc", "http://creativecommons.org/ns#"),
    ("ctag", "http://commontag.org/ns#"),
    ("dc", "http://purl.org/dc/terms/"),
    ("dc11", "http://purl.org/dc/elements/1.1/"),
    ("dcterms", "http://purl.org/dc/terms/"),
    ("foaf", "http://xmlns.com/foaf/0.1/"),
    ("gr", "http://purl.org/goodrelations/v1#"),
    ("ical", "http://www.w3.org/2002/12/cal/icaltzd#"),
    ("og", "http://ogp.me/ns#"),
    ("rev", "http://purl.org/stuff/rev#"),
    ("schema", "http://schema.org/"),
    ("schemas", "https://schema.org/"),
    ("sioc", "http://rdfs.org/sioc/ns#"),
    ("v", "http://rdf.data-vocabulary.org/#"),
    ("vcard", "http://www.w3.org/2006/vcard/ns#"),
];
