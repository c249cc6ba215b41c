use rdfa_ttl::earl::{Assertion, Outcome, Report};
use rdfa_ttl::suite::{HostLanguage, RdfaVersion, TestSuite};
use rdfa_ttl::{Node, PrefixRegistry, TurtleSerializer};

#[test]
fn report_serializes_with_earl_prefixes() {
    let suite = TestSuite::default();
    let mut report = Report::new();
    report.record(&Assertion {
        assertor: Node::iri(suite.base()),
        subject: Node::iri("http://example.org/processor"),
        test: Node::iri(suite.test_url(RdfaVersion::Rdfa1_1, HostLanguage::Html5, "0001", None)),
        outcome: Outcome::from_results(true, true),
    });

    let turtle = TurtleSerializer::new(PrefixRegistry::earl()).serialize(report.graph());
    insta::assert_snapshot!(turtle, @r"
    @prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
    @prefix earl: <http://www.w3.org/ns/earl#> .

    _:assertion0
       rdf:type earl:Assertion;
       earl:assertedBy <http://rdfa.info/test-suite/>;
       earl:subject <http://example.org/processor>;
       earl:test <http://rdfa.info/test-suite/test-cases/rdfa1.1/html5/0001.html>;
       earl:mode earl:automatic;
       earl:result _:result0 .
    _:result0
       rdf:type earl:TestResult;
       earl:outcome earl:passed .
    ");
}
