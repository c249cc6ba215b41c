use pretty_assertions::assert_eq;
use rdfa_ttl::suite::{
    self, Alternate, HostLanguage, RdfaVersion, TestCase, TestSuite, wrap_test_document,
};
use rstest::*;

const FRAGMENT: &str = "xmlns:dc=\"http://purl.org/dc/elements/1.1/\"\n\
<head>\n\
<title>Test 0001</title>\n\
</head>\n\
<body>\n\
<p about=\"$TCPATH/photo1.jpg\"><a rel=\"next\" href=\"0002.xhtml\">next</a></p>\n\
</body>\n";

fn tcpath(version: RdfaVersion, host: HostLanguage) -> String {
    TestSuite::default().tcpath(version, host)
}

#[test]
fn html5_document() {
    let tcpath = tcpath(RdfaVersion::Rdfa1_1, HostLanguage::Html5);
    assert_eq!(tcpath, "http://rdfa.info/test-suite/test-cases/rdfa1.1/html5");

    assert_eq!(
        wrap_test_document(FRAGMENT, RdfaVersion::Rdfa1_1, HostLanguage::Html5, &tcpath),
        "<!DOCTYPE html>\n\
         <html xmlns:dc=\"http://purl.org/dc/elements/1.1/\">\n\
         <head>\n\
         <title>Test 0001</title>\n\
         </head>\n\
         <body>\n\
         <p about=\"http://rdfa.info/test-suite/test-cases/rdfa1.1/html5/photo1.jpg\"><a rel=\"next\" href=\"0002.html\">next</a></p>\n\
         </body>\n\
         </html>"
    );
}

#[test]
fn xhtml1_rdfa10_document() {
    let tcpath = tcpath(RdfaVersion::Rdfa1_0, HostLanguage::Xhtml1);
    let document =
        wrap_test_document(FRAGMENT, RdfaVersion::Rdfa1_0, HostLanguage::Xhtml1, &tcpath);

    assert_eq!(
        document.lines().take(3).collect::<Vec<_>>(),
        [
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>",
            "<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML+RDFa 1.0//EN\" \"http://www.w3.org/MarkUp/DTD/xhtml-rdfa-1.dtd\">",
            "<html xmlns=\"http://www.w3.org/1999/xhtml\" version=\"XHTML+RDFa 1.0\" xmlns:dc=\"http://purl.org/dc/elements/1.1/\">",
        ]
    );
    assert!(document.contains("href=\"0002.xhtml\""));
    assert!(document.ends_with("</body>\n</html>"));
}

#[rstest]
#[case::html4(HostLanguage::Html4, "<!DOCTYPE HTML PUBLIC \"-//W3C//DTD HTML 4.01//EN\"", "</html>")]
#[case::xhtml1(HostLanguage::Xhtml1, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML+RDFa 1.1//EN\"", "</html>")]
#[case::xhtml5(HostLanguage::Xhtml5, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE html>\n<html xmlns:dc", "</html>")]
#[case::xml(HostLanguage::Xml, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root xmlns:dc", "</root>")]
fn document_wrapper(#[case] host: HostLanguage, #[case] start: &str, #[case] end: &str) {
    let tcpath = tcpath(RdfaVersion::Rdfa1_1, host);
    let document = wrap_test_document(FRAGMENT, RdfaVersion::Rdfa1_1, host, &tcpath);

    assert!(document.starts_with(start), "{document}");
    assert!(document.ends_with(end), "{document}");
    assert!(document.contains(&format!("href=\"0002.{}\"", host.document_suffix())));
}

#[test]
fn svg_namespace_ends_declarations() {
    let fragment = "xmlns=\"http://www.w3.org/2000/svg\"\n<title>x</title>\n";
    let tcpath = tcpath(RdfaVersion::Rdfa1_1, HostLanguage::Svg);

    assert_eq!(
        wrap_test_document(fragment, RdfaVersion::Rdfa1_1, HostLanguage::Svg, &tcpath),
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\">\n\
         <title>x</title>\n\
         </svg>"
    );
}

#[test]
fn query_is_not_wrapped() {
    let query = "ASK WHERE {\n  <$TCPATH/0001.xhtml> <http://purl.org/dc/elements/1.1/creator> \"Mark Birbeck\" .\n}\n";
    let tcpath = tcpath(RdfaVersion::Rdfa1_1, HostLanguage::Html5);

    assert_eq!(
        suite::wrap_query(query, HostLanguage::Html5, &tcpath),
        "ASK WHERE {\n  <http://rdfa.info/test-suite/test-cases/rdfa1.1/html5/0001.html> <http://purl.org/dc/elements/1.1/creator> \"Mark Birbeck\" .\n}\n"
    );
}

#[test]
fn test_urls() {
    let suite = TestSuite::new("http://example.org/test-suite").unwrap();

    assert_eq!(
        suite.test_url(RdfaVersion::Rdfa1_1, HostLanguage::Xhtml5, "0042", None),
        "http://example.org/test-suite/test-cases/rdfa1.1/xhtml5/0042.xhtml"
    );
    assert_eq!(
        suite.test_url(RdfaVersion::Rdfa1_0, HostLanguage::Svg, "0042", Some("sparql")),
        "http://example.org/test-suite/test-cases/rdfa1.0/svg/0042.sparql"
    );
}

#[test]
fn alternates_cover_every_host_and_version() {
    let test = TestCase {
        num: "0001".into(),
        title: "Predicate establishment with @property".into(),
        host_languages: vec![HostLanguage::Html5, HostLanguage::Xml],
        versions: vec![RdfaVersion::Rdfa1_0, RdfaVersion::Rdfa1_1],
        expected_results: true,
    };

    let alternates = TestSuite::default().alternates(&test);
    assert_eq!(
        alternates
            .iter()
            .map(|a| a.suite_version.as_str())
            .collect::<Vec<_>>(),
        ["html5+rdfa1.0", "html5+rdfa1.1", "xml+rdfa1.0", "xml+rdfa1.1"]
    );
    assert_eq!(
        alternates[3],
        Alternate {
            num: "0001".into(),
            doc_url: "http://rdfa.info/test-suite/test-cases/rdfa1.1/xml/0001.xml".into(),
            suite_version: "xml+rdfa1.1".into(),
        }
    );
}

#[rstest]
#[case("html5", "http://rdfa.info/test-suite/test-cases/html5/0001.html")]
#[case("xhtml", "http://rdfa.info/test-suite/test-cases/xhtml1/0001.xhtml")]
#[case("svgtiny", "http://rdfa.info/test-suite/test-cases/svgtiny/0001.svg")]
fn variant_documents(#[case] variant: &str, #[case] expected: &str) {
    let host: HostLanguage = variant.parse().unwrap();
    let merged = "http://rdfa.info/test-suite/test-cases/0001.html";
    assert_eq!(suite::variant_document_iri(merged, host), expected);
    assert_eq!(
        suite::variant_iri("http://rdfa.info/test-suite/test-cases/0001", host),
        format!(
            "http://rdfa.info/test-suite/test-cases/{}/0001",
            host.variant_directory()
        )
    );
}

#[test]
fn ask_query_targets_extractor() {
    let extract_url = suite::extractor_url(
        "http://example.org/extract?uri=",
        "http://rdfa.info/test-suite/test-cases/rdfa1.1/html5/0001.html",
    );
    assert_eq!(
        extract_url,
        "http://example.org/extract?uri=http://rdfa.info/test-suite/test-cases/rdfa1.1/html5/0001.html"
    );

    assert_eq!(
        suite::rewrite_ask_query("ASK WHERE { ?s ?p ?o }", &extract_url),
        format!("ASK FROM <{extract_url}> WHERE {{ ?s ?p ?o }}")
    );
}

#[test]
fn extractor_url_escapes_only_characters_outside_uris() {
    assert_eq!(
        suite::extractor_url(
            "http://example.org/extract?uri=",
            "http://example.org/my doc/\"caf\u{e9}\".html?a=1&b=2",
        ),
        "http://example.org/extract?uri=http://example.org/my%20doc/%22caf%C3%A9%22.html?a=1&b=2"
    );
}
