// Corrects words read from stdin, one result line per word.
// Plain output: `word<TAB>best<TAB>alt1,alt2,...`; with --json one object per line.
use clap::Parser;
use serde::Serialize;
use spell_core::cli::{init_logging, EngineArgs};
use spell_core::{ModelSource, Suggestion};
use std::io::{self, BufRead, BufWriter, Write};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "spell_batch", version, about = "Correct words read from stdin")]
struct Cli {
    #[command(flatten)]
    engine: EngineArgs,

    /// Emit JSON lines instead of tab-separated text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    word: &'a str,
    suggestions: &'a [Suggestion],
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let engine = cli.engine.engine()?;

    let source = engine.build_model_blocking(cli.engine.rebuild)?;
    let stats = engine.stats();
    info!(
        from_cache = source == ModelSource::Cache,
        words = stats.words,
        tokens = stats.total,
        "model ready"
    );

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    let mut corrected = 0usize;

    for line in stdin.lock().lines() {
        let line = line?;
        for word in line.split_whitespace() {
            let suggestions = engine.suggest(word);
            if cli.json {
                serde_json::to_writer(&mut out, &JsonLine { word, suggestions: &suggestions })?;
                writeln!(out)?;
            } else {
                write_plain(&mut out, word, &suggestions)?;
            }
            corrected += 1;
        }
    }
    out.flush()?;
    info!(words = corrected, "batch finished");
    Ok(())
}

fn write_plain(out: &mut impl Write, word: &str, suggestions: &[Suggestion]) -> io::Result<()> {
    let best = suggestions.first().map_or("", |s| s.word.as_str());
    let alternatives: Vec<&str> = suggestions.iter().skip(1).map(|s| s.word.as_str()).collect();
    writeln!(out, "{word}\t{best}\t{}", alternatives.join(","))
}
