use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand, ValueEnum};
use oxiri::Iri;
use rdfa_ttl::suite::{self, HostLanguage, RdfaVersion, TestSuite};
use rdfa_ttl::{PrefixRegistry, QuoteEscaping, Serialization, TurtleSerializer};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Re-serialize a Turtle or N-Triples document with CURIE compaction.
    Turtle {
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Base IRI for relative IRIs in the input.
        #[arg(long, value_parser = parse_iri)]
        base: Option<Iri<String>>,

        /// Prefixes to compact with.
        #[arg(long, value_enum, default_value_t = Registry::Rdfa)]
        registry: Registry,

        /// Escape every `"` in literals, not only the first.
        #[arg(long)]
        escape_all_quotes: bool,
    },
    /// Wrap a stored test fragment into a test document.
    Wrap {
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// RDFa version, e.g. `rdfa1.1`.
        #[arg(long)]
        rdfa_version: RdfaVersion,

        /// Host language, e.g. `html5`.
        #[arg(long)]
        host: HostLanguage,

        #[arg(long, default_value = suite::DEFAULT_SUITE_BASE)]
        suite_base: url::Url,

        /// The input is a SPARQL validation query.
        #[arg(long)]
        query: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Registry {
    /// RDFa 1.1 initial context.
    Rdfa,
    /// EARL and test-manifest vocabularies, then the RDFa initial context.
    Earl,
}

fn parse_iri(iri: &str) -> Result<Iri<String>, oxiri::IriParseError> {
    Iri::parse(iri.to_string())
}

/// Parses `content` as Turtle and serializes it again. Diagnostics are
/// logged as warnings by the serializer.
fn reserialize(
    content: &str,
    base: Option<Iri<String>>,
    registry: &PrefixRegistry,
    quote_escaping: QuoteEscaping,
) -> Result<Serialization, Box<dyn std::error::Error>> {
    let mut parser = oxttl::TurtleParser::new();
    if let Some(base) = base {
        parser = parser.with_base_iri(base.into_inner())?;
    }

    let mut parsed = oxrdf::Graph::new();
    for triple in parser.for_slice(content.as_bytes()) {
        parsed.insert(&triple?);
    }
    tracing::debug!(triples = parsed.len(), "parsed input");

    let graph = rdfa_ttl::Graph::from(&parsed);
    Ok(TurtleSerializer::new(registry)
        .with_quote_escaping(quote_escaping)
        .serialize_with_diagnostics(&graph))
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let args = Args::parse();
    match args.command {
        Command::Turtle {
            input,
            base,
            registry,
            escape_all_quotes,
        } => {
            let content = std::fs::read_to_string(&input)?;

            let registry = match registry {
                Registry::Rdfa => PrefixRegistry::rdfa_initial_context(),
                Registry::Earl => PrefixRegistry::earl(),
            };
            let quote_escaping = if escape_all_quotes {
                QuoteEscaping::All
            } else {
                QuoteEscaping::FirstOccurrence
            };

            let serialization = reserialize(&content, base, registry, quote_escaping)?;
            print!("{}", serialization.turtle);
        }
        Command::Wrap {
            input,
            rdfa_version,
            host,
            suite_base,
            query,
        } => {
            let raw = std::fs::read_to_string(&input)?;
            let suite = TestSuite::new(suite_base.as_str())?;
            let tcpath = suite.tcpath(rdfa_version, host);

            if query {
                print!("{}", suite::wrap_query(&raw, host, &tcpath));
            } else {
                println!(
                    "{}",
                    suite::wrap_test_document(&raw, rdfa_version, host, &tcpath)
                );
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
