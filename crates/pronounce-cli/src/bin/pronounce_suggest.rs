// pronounce-suggest: Autocomplete word prefixes from a vocabulary.
//
// Takes prefixes as arguments, or reads them from stdin (one per line) when
// none are given, and prints the matching words lexicographically, one
// indented word per line. Prefixes are lower-cased and trimmed before lookup.
//
// Usage:
//   pronounce-suggest [-w WORDLIST] [OPTIONS] [--] [PREFIX...]
//
// Options:
//   -w, --wordlist PATH  Word list file (one word per line)
//   -n, --limit N        Maximum number of suggestions per prefix (default: 10)
//   --stats              Print vocabulary statistics and exit
//   -h, --help           Print help

use std::io::{self, BufRead, Write};

use pronounce_trie::Vocabulary;

/// Default number of suggestions per prefix.
const DEFAULT_LIMIT: usize = 10;

fn main() {
    pronounce_cli::trace_init::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (args, operands) = pronounce_cli::split_operands(&args);

    if pronounce_cli::wants_help(&args) {
        println!("pronounce-suggest: Autocomplete word prefixes.");
        println!();
        println!("Usage: pronounce-suggest [-w WORDLIST] [OPTIONS] [--] [PREFIX...]");
        println!();
        println!("If PREFIX arguments are given, suggests for each prefix.");
        println!("Otherwise reads prefixes from stdin (one per line).");
        println!();
        println!("Word list search order: -w, ${}, ~/.pronounce/words.txt,", pronounce_cli::WORDLIST_ENV);
        println!("./words.txt, then the bundled list.");
        println!();
        println!("Options:");
        println!("  -w, --wordlist PATH  Word list file (one word per line)");
        println!("  -n, --limit N        Maximum suggestions per prefix (default: {DEFAULT_LIMIT})");
        println!("  --stats              Print vocabulary statistics and exit");
        println!("  -h, --help           Print this help");
        return;
    }

    let (wordlist, args) = pronounce_cli::parse_option(&args, "--wordlist", "-w")
        .unwrap_or_else(|e| pronounce_cli::fatal(&e));
    let (limit, mut args) = pronounce_cli::parse_option(&args, "--limit", "-n")
        .unwrap_or_else(|e| pronounce_cli::fatal(&e));
    let stats = pronounce_cli::take_flag(&mut args, "--stats");

    let limit = match limit {
        Some(n) => n
            .parse::<usize>()
            .unwrap_or_else(|_| pronounce_cli::fatal("invalid number for --limit")),
        None => DEFAULT_LIMIT,
    };

    if let Some(unknown) = args.iter().find(|a| a.starts_with('-')) {
        pronounce_cli::fatal(&format!("unknown option {unknown}"));
    }
    args.extend(operands);

    let (vocab, source) = pronounce_cli::load_vocabulary(wordlist.as_deref())
        .unwrap_or_else(|e| pronounce_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if stats {
        let s = vocab.stats();
        let _ = writeln!(out, "source: {source}");
        let _ = writeln!(out, "words: {}", s.words);
        let _ = writeln!(out, "nodes: {}", s.nodes);
        let _ = writeln!(out, "longest word: {}", s.max_depth);
        return;
    }

    let suggest_prefix = |prefix: &str, vocab: &Vocabulary, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let prefix = prefix.trim().to_lowercase();
        let suggestions = vocab.suggest(&prefix, limit);
        if suggestions.is_empty() {
            let _ = writeln!(out, "{prefix}: (no suggestions)");
        } else {
            let _ = writeln!(out, "{prefix}:");
            for s in &suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }
    };

    if args.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            suggest_prefix(&line, &vocab, &mut out);
        }
    } else {
        for prefix in &args {
            suggest_prefix(prefix, &vocab, &mut out);
        }
    }
}
