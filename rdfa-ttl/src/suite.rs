//! Test-suite helpers: where test documents live, and how one test fragment
//! becomes a document in each host language.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use oxiri::Iri;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;

use crate::Error;

pub const DEFAULT_SUITE_BASE: &str = "http://rdfa.info/test-suite/";

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HostLanguage {
    Html4,
    Html5,
    Xhtml1,
    Xhtml5,
    Svg,
    Xml,
}

impl HostLanguage {
    pub const ALL: [HostLanguage; 6] = [
        HostLanguage::Html4,
        HostLanguage::Html5,
        HostLanguage::Xhtml1,
        HostLanguage::Xhtml5,
        HostLanguage::Svg,
        HostLanguage::Xml,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HostLanguage::Html4 => "html4",
            HostLanguage::Html5 => "html5",
            HostLanguage::Xhtml1 => "xhtml1",
            HostLanguage::Xhtml5 => "xhtml5",
            HostLanguage::Svg => "svg",
            HostLanguage::Xml => "xml",
        }
    }

    /// Directory of this host language in manifests split from the merged
    /// manifest; these use the older variant names.
    pub fn variant_directory(self) -> &'static str {
        match self {
            HostLanguage::Svg => "svgtiny",
            host => host.as_str(),
        }
    }

    /// File extension of test documents in this host language.
    pub fn document_suffix(self) -> &'static str {
        match self {
            HostLanguage::Xhtml1 | HostLanguage::Xhtml5 => "xhtml",
            HostLanguage::Html4 | HostLanguage::Html5 => "html",
            HostLanguage::Svg => "svg",
            HostLanguage::Xml => "xml",
        }
    }
}

impl fmt::Display for HostLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HostLanguage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html4" => Ok(HostLanguage::Html4),
            "html5" => Ok(HostLanguage::Html5),
            // merged manifests name the XHTML 1.1 variant without its version
            "xhtml1" | "xhtml" => Ok(HostLanguage::Xhtml1),
            "xhtml5" => Ok(HostLanguage::Xhtml5),
            "svg" | "svgtiny" => Ok(HostLanguage::Svg),
            "xml" => Ok(HostLanguage::Xml),
            other => Err(Error::UnknownHostLanguage(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RdfaVersion {
    Rdfa1_0,
    Rdfa1_1,
}

impl RdfaVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            RdfaVersion::Rdfa1_0 => "rdfa1.0",
            RdfaVersion::Rdfa1_1 => "rdfa1.1",
        }
    }
}

impl fmt::Display for RdfaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RdfaVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rdfa1.0" => Ok(RdfaVersion::Rdfa1_0),
            "rdfa1.1" => Ok(RdfaVersion::Rdfa1_1),
            other => Err(Error::UnknownRdfaVersion(other.to_string())),
        }
    }
}

/// A manifest entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    /// Four-digit test number, e.g. `0001`.
    pub num: String,
    pub title: String,
    pub host_languages: Vec<HostLanguage>,
    pub versions: Vec<RdfaVersion>,
    /// The boolean the validation `ASK` query should produce.
    pub expected_results: bool,
}

/// One (host language, version) rendering of a test case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alternate {
    pub num: String,
    pub doc_url: String,
    /// `<host language>+<version>`, e.g. `html5+rdfa1.1`.
    pub suite_version: String,
}

/// Locations of test documents below a test-suite base IRI.
#[derive(Clone, Debug)]
pub struct TestSuite {
    base: Iri<String>,
}

impl Default for TestSuite {
    fn default() -> Self {
        Self {
            base: Iri::parse(DEFAULT_SUITE_BASE.to_string()).expect("valid base IRI"),
        }
    }
}

impl TestSuite {
    /// Test documents are placed below `base`, which is treated as a
    /// directory even without a trailing `/`.
    pub fn new(base: &str) -> Result<Self, Error> {
        let mut base = base.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        let base = Iri::parse(base.clone()).map_err(|source| Error::IriParseError {
            source,
            iri: base,
        })?;

        Ok(Self { base })
    }

    pub fn base(&self) -> &str {
        self.base.as_str()
    }

    /// The directory holding the documents of one suite, without a trailing
    /// `/`. Test fragments refer to it as `$TCPATH`.
    pub fn tcpath(&self, version: RdfaVersion, host: HostLanguage) -> String {
        format!("{}test-cases/{version}/{host}", self.base())
    }

    /// The URL of a test document; `suffix` defaults to the host language's
    /// document suffix (pass `Some("sparql")` for the validation query).
    pub fn test_url(
        &self,
        version: RdfaVersion,
        host: HostLanguage,
        num: &str,
        suffix: Option<&str>,
    ) -> String {
        let suffix = suffix.unwrap_or(host.document_suffix());
        format!("{}/{num}.{suffix}", self.tcpath(version, host))
    }

    pub fn alternates(&self, test: &TestCase) -> Vec<Alternate> {
        test.host_languages
            .iter()
            .cartesian_product(&test.versions)
            .map(|(&host, &version)| Alternate {
                num: test.num.clone(),
                doc_url: self.test_url(version, host, &test.num, None),
                suite_version: format!("{host}+{version}"),
            })
            .collect()
    }
}

fn document_reference() -> &'static Regex {
    static DOCUMENT_REFERENCE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    DOCUMENT_REFERENCE.get_or_init(|| Regex::new(r"([0-9]{4})\.xhtml").expect("valid regex"))
}

/// Points references to other test documents and to `$TCPATH` at the
/// documents of `host`.
fn rewrite_references(content: &str, host: HostLanguage, tcpath: &str) -> String {
    let replacement = format!("${{1}}.{}", host.document_suffix());
    document_reference()
        .replace_all(content, replacement.as_str())
        .replace("$TCPATH", tcpath)
}

/// Builds the test document for `host` from a stored test fragment.
///
/// Lines before the `<head` line (or up to and including the line declaring
/// the SVG namespace) are namespace declarations; they end up as attributes
/// of the root element.
pub fn wrap_test_document(
    raw: &str,
    version: RdfaVersion,
    host: HostLanguage,
    tcpath: &str,
) -> String {
    let mut found_head = false;
    let mut namespaces = Vec::new();
    let mut content = String::new();
    for line in raw.split_inclusive('\n') {
        if line.contains("<head") {
            found_head = true;
        }

        if found_head {
            content.push_str(line);
        } else {
            found_head = line.contains(SVG_NAMESPACE);
            namespaces.push(line.trim());
        }
    }

    let namespaces = if namespaces.is_empty() {
        String::new()
    } else {
        format!(" {}", namespaces.join("\n"))
    };
    let content = rewrite_references(&content, host, tcpath);

    match host {
        HostLanguage::Html4 => format!(
            "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \"http://www.w3.org/MarkUp/DTD/html401-rdfa11-1.dtd\">\n\
             <html version=\"XHTML+RDFa 1.1\"{namespaces}>\n{content}</html>"
        ),
        HostLanguage::Html5 => format!("<!DOCTYPE html>\n<html{namespaces}>\n{content}</html>"),
        HostLanguage::Xhtml1 => {
            let (doctype, rdfa) = match version {
                RdfaVersion::Rdfa1_0 => (
                    "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML+RDFa 1.0//EN\" \"http://www.w3.org/MarkUp/DTD/xhtml-rdfa-1.dtd\">",
                    "1.0",
                ),
                RdfaVersion::Rdfa1_1 => (
                    "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML+RDFa 1.1//EN\" \"http://www.w3.org/MarkUp/DTD/xhtml-rdfa-2.dtd\">",
                    "1.1",
                ),
            };
            format!(
                "{XML_DECLARATION}{doctype}\n\
                 <html xmlns=\"http://www.w3.org/1999/xhtml\" version=\"XHTML+RDFa {rdfa}\"{namespaces}>\n{content}</html>"
            )
        }
        HostLanguage::Xhtml5 => {
            format!("{XML_DECLARATION}<!DOCTYPE html>\n<html{namespaces}>\n{content}</html>")
        }
        HostLanguage::Svg => format!("{XML_DECLARATION}<svg{namespaces}>\n{content}</svg>"),
        HostLanguage::Xml => format!("{XML_DECLARATION}<root{namespaces}>\n{content}</root>"),
    }
}

/// The validation query of a test, with its references pointed at `host`.
pub fn wrap_query(raw: &str, host: HostLanguage, tcpath: &str) -> String {
    rewrite_references(raw, host, tcpath)
}

/// Moves an IRI from a merged manifest into the directory of `host`.
pub fn variant_iri(iri: &str, host: HostLanguage) -> String {
    iri.replacen(
        "test-cases",
        &format!("test-cases/{}", host.variant_directory()),
        1,
    )
}

/// As [`variant_iri`], also renaming `.html` documents to the suffix the
/// XHTML1 and SVG variants use.
pub fn variant_document_iri(iri: &str, host: HostLanguage) -> String {
    let iri = variant_iri(iri, host);
    match (host, iri.strip_suffix(".html")) {
        (HostLanguage::Xhtml1 | HostLanguage::Svg, Some(stem)) => {
            format!("{stem}.{}", host.document_suffix())
        }
        _ => iri,
    }
}

/// Makes a validation query run against the graph an extractor returns for
/// `extract_url`.
pub fn rewrite_ask_query(query: &str, extract_url: &str) -> String {
    query.replacen("ASK WHERE", &format!("ASK FROM <{extract_url}> WHERE"), 1)
}

/// Characters left alone when a document URL is appended to an extractor
/// URL: unreserved and reserved URI characters.
const DOCUMENT_URL: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b';')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b',')
    .remove(b'[')
    .remove(b']');

/// The URL asking `extractor` to process `doc_url`. Characters outside the
/// URI grammar (spaces, quotes, non-ASCII) are percent-encoded; the rest of
/// the document URL is appended as is.
pub fn extractor_url(extractor: &str, doc_url: &str) -> String {
    format!("{extractor}{}", utf8_percent_encode(doc_url, DOCUMENT_URL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip() {
        for host in HostLanguage::ALL {
            assert_eq!(host.as_str().parse::<HostLanguage>().unwrap(), host);
        }
        assert_eq!("svgtiny".parse::<HostLanguage>().unwrap(), HostLanguage::Svg);
        assert_eq!(HostLanguage::Svg.variant_directory(), "svgtiny");
        assert_eq!(HostLanguage::Xhtml1.variant_directory(), "xhtml1");
        assert!(matches!(
            "html3".parse::<HostLanguage>(),
            Err(Error::UnknownHostLanguage(t)) if t == "html3"
        ));
        assert!(matches!(
            "rdfa2.0".parse::<RdfaVersion>(),
            Err(Error::UnknownRdfaVersion(_))
        ));
    }

    #[test]
    fn base_gets_trailing_slash() {
        let suite = TestSuite::new("http://example.org/suite").unwrap();
        assert_eq!(suite.base(), "http://example.org/suite/");
        assert!(TestSuite::new("not an iri").is_err());
    }

    #[test]
    fn references_follow_host_suffix() {
        assert_eq!(
            rewrite_references("<a href=\"0012.xhtml\">$TCPATH/x.png</a>", HostLanguage::Svg, "T"),
            "<a href=\"0012.svg\">T/x.png</a>"
        );
    }
}
