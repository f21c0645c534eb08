use anyhow::Context;
use clap::Parser;
use sonnet_search::{
    QueryDocument, SearchIndex, Settings, Tokenizer,
    cli::{Cli, Commands},
    corpus, format,
};
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    sonnet_search::tracing::init(cli.verbose);

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(path) = cli.corpus {
        settings.corpus = path;
    }
    if let Some(label) = cli.label {
        settings.label = label;
    }

    let documents = corpus::load(&settings.corpus, &settings.label)
        .with_context(|| format!("Failed to load corpus from {}", settings.corpus.display()))?;
    let index = SearchIndex::build(
        &documents,
        Tokenizer::with_algorithm(settings.language.algorithm()),
    )
    .context("Failed to build search index")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Search { words, json } => {
            let query = QueryDocument::new(words.join(" "));
            let matches = index.search(&query);
            if json {
                let stems = index.query_stems(&query);
                writeln!(out, "{}", format::matches_json(query.raw_text(), &stems, &matches)?)?;
            } else {
                write!(
                    out,
                    "{}",
                    format::render_matches(query.raw_text(), &settings.label, &matches)
                )?;
            }
        }
        Commands::Interactive => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut buffer = String::new();
            loop {
                write!(out, "\nWhich word(s) do you want to look up: ")?;
                out.flush()?;

                buffer.clear();
                if input.read_line(&mut buffer)? == 0 || buffer.trim() == "exit" {
                    break;
                }

                let query = QueryDocument::new(buffer.trim());
                let matches = index.search(&query);
                write!(
                    out,
                    "{}",
                    format::render_matches(query.raw_text(), &settings.label, &matches)
                )?;
            }
        }
        Commands::Show { id } => {
            let document = index
                .get(id)
                .with_context(|| format!("No {} {} in the corpus", settings.label, id))?;
            write!(out, "{}", format::render_document(document))?;
        }
        Commands::Stems { words } => {
            let query = QueryDocument::new(words.join(" "));
            writeln!(out, "{}", index.query_stems(&query).join(" "))?;
        }
        Commands::Stats => {
            writeln!(out, "documents: {}", index.document_count())?;
            writeln!(out, "unique stems: {}", index.terms().term_count())?;
            writeln!(out, "stem-document pairs: {}", index.terms().posting_count())?;
        }
    }

    Ok(())
}
