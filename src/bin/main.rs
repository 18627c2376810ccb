use anyhow::{bail, Context};
use clap::Parser;
use crossterm::style::Stylize;
use spell_core::cli::{init_logging, EngineArgs};
use spell_core::{SpellingEngine, Suggestion};
use std::io::{stdin, stdout, BufRead, Write};
use std::sync::mpsc;

/// Interactive spelling corrector. Type words to see ranked corrections.
#[derive(Parser, Debug)]
#[command(name = "spellcorrect", version)]
struct Cli {
    #[command(flatten)]
    engine: EngineArgs,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let engine = cli.engine.engine()?;

    println!("Loading model for '{}'...", engine.corpus_path().display());
    let (tx, rx) = mpsc::channel();
    engine.build_model(cli.engine.rebuild, move |ok| {
        let _ = tx.send(ok);
    });
    let built = rx.recv().context("model build thread vanished")?;
    if !built {
        bail!(
            "could not build a model from '{}' (run with RUST_LOG=debug for details)",
            engine.corpus_path().display()
        );
    }

    let stats = engine.stats();
    println!(
        "Ready: {} distinct words, {} tokens. ':help' for commands, ':quit' to exit.",
        stats.words, stats.total
    );

    let mut line = String::new();
    loop {
        print!("\n> ");
        stdout().flush()?;
        line.clear();
        if stdin().lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match input {
            "" => continue,
            ":quit" | ":q" | "exit" => break,
            ":help" => print_help(),
            ":stats" => {
                let stats = engine.stats();
                println!("{} distinct words, {} tokens", stats.words, stats.total);
            }
            ":save" => match engine.save_model() {
                Ok(()) => println!("Model saved to '{}'", engine.cache().path().display()),
                Err(e) => eprintln!("{} {e}", "[ERROR]".red()),
            },
            s if s.starts_with(":learn ") => {
                engine.learn_text(&s[":learn ".len()..]);
                println!("Learned. Use ':save' to keep it across runs.");
            }
            s if s.starts_with(':') => println!("Unknown command '{s}'. Try ':help'."),
            words => {
                for word in words.split_whitespace() {
                    print_suggestions(&engine, word);
                }
            }
        }
    }
    Ok(())
}

fn print_suggestions(engine: &SpellingEngine, word: &str) {
    let suggestions = engine.suggest(word);
    match suggestions.as_slice() {
        [] => println!("{word}: {}", "no suggestions".dark_grey()),
        [Suggestion { count: 0, .. }] => {
            println!("{word}: {}", "unknown, nothing within two edits".yellow())
        }
        [only] if only.word.eq_ignore_ascii_case(word) => {
            println!("{word}: {} (seen {} times)", "correct".green(), only.count)
        }
        [best, rest @ ..] => {
            println!("{word} -> {} ({})", best.word.as_str().green().bold(), best.count);
            for (i, s) in rest.iter().enumerate() {
                println!("  {}: {} ({})", i + 2, s.word, s.count);
            }
        }
    }
}

fn print_help() {
    println!("  <words>         show corrections for each word");
    println!("  :learn <text>   add the words of <text> to the model");
    println!("  :save           write the model to the cache file");
    println!("  :stats          model size");
    println!("  :quit           exit");
}
