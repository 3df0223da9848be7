// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::time::Instant;

use clap::Parser;

use fieldmatch::{
    split_to_words, AccentGroup, Corpus, DocumentId, ErrorValues, IndexWeights, Matcher,
    MatchResults, Result, Word,
};

mod cli;
use cli::display;
use cli::{Cli, Commands, ErrorPreset, MatchOptions};

fn main() {
    fieldmatch::init_logger();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Query {
            file,
            query,
            options,
            json,
        } => run_query(&file, &query.join(" "), &options, json),
        Commands::Repl { file, options } => run_repl(&file, &options),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// A loaded file: the corpus, the field it went into, and a ready matcher.
struct Session {
    corpus: Corpus,
    field: Word,
    matcher: Matcher,
}

impl Session {
    fn open(path: &str, options: &MatchOptions) -> Result<Self> {
        let field = Word::new(&options.field)?;

        #[cfg(feature = "parallel")]
        let spinner = display::loading_spinner("Loading", path.to_string());

        let start = Instant::now();
        let corpus = Corpus::from_lines(BufReader::new(File::open(path)?), &field)?;

        #[cfg(feature = "parallel")]
        {
            spinner.set_prefix("Indexing");
            spinner.set_message(format!("{} documents", corpus.len()));
        }

        let matcher = Matcher::with_config(error_values(options)?, IndexWeights::new());
        matcher.index(&corpus);

        #[cfg(feature = "parallel")]
        spinner.finish_and_clear();

        if let Some(stats) = matcher.stats() {
            display::print_stats(&stats, start.elapsed());
        }

        Ok(Session {
            corpus,
            field,
            matcher,
        })
    }

    fn text_of(&self, id: DocumentId) -> String {
        // from_lines hands out ids 0.. in corpus order
        self.corpus
            .get_document(id as usize)
            .and_then(|doc| doc.get_text(&self.field))
            .map(|text| text.to_text())
            .unwrap_or_default()
    }

    fn run(&self, query: &str) -> Result<(MatchResults, std::time::Duration)> {
        let start = Instant::now();
        let mut results = MatchResults::new();
        self.matcher.match_query(&split_to_words(query), &mut results)?;
        Ok((results, start.elapsed()))
    }
}

fn error_values(options: &MatchOptions) -> Result<ErrorValues> {
    let mut errors = ErrorValues::new();
    match options.errors {
        Some(ErrorPreset::Keyboard) => errors.add_keyboard_errors(),
        Some(ErrorPreset::Numberpad) => errors.add_numberpad_errors(),
        Some(ErrorPreset::Accents) => errors.add_accents(AccentGroup::Latin)?,
        Some(ErrorPreset::Standard) => errors.add_standard_errors()?,
        None => {}
    }
    if options.substring {
        errors.set_substring_mode();
    }
    Ok(errors)
}

fn run_query(path: &str, query: &str, options: &MatchOptions, json: bool) -> Result<()> {
    let session = Session::open(path, options)?;
    let (mut results, elapsed) = session.run(query)?;

    if json {
        #[cfg(feature = "serde_json")]
        {
            results.truncate(options.limit);
            print_json(&session, &results);
            return Ok(());
        }
        #[cfg(not(feature = "serde_json"))]
        eprintln!("⚠️  built without serde_json; printing a table instead");
    }

    display::print_results(query, &results, options.limit, elapsed, |id| {
        session.text_of(id)
    });
    Ok(())
}

#[cfg(feature = "serde_json")]
fn print_json(session: &Session, results: &MatchResults) {
    #[derive(serde::Serialize)]
    struct Hit {
        id: DocumentId,
        relevancy: f64,
        text: String,
    }

    let hits: Vec<Hit> = results
        .iter()
        .map(|r| Hit {
            id: r.id,
            relevancy: r.relevancy,
            text: session.text_of(r.id),
        })
        .collect();
    match serde_json::to_string_pretty(&hits) {
        Ok(out) => println!("{}", out),
        Err(e) => eprintln!("❌ {}", e),
    }
}

fn run_repl(path: &str, options: &MatchOptions) -> Result<()> {
    let session = Session::open(path, options)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        let (results, elapsed) = session.run(query)?;
        display::print_results(query, &results, options.limit, elapsed, |id| {
            session.text_of(id)
        });
    }
    Ok(())
}
