// pronounce-score: Score spoken sentences against reference sentences.
//
// Takes a REFERENCE and a CANDIDATE sentence as arguments, or reads
// tab-separated "reference<TAB>candidate" pairs from stdin (one per line).
// Both sides are normalized (lower-cased, punctuation removed) before the
// word-level comparison.
//
// Usage:
//   pronounce-score [OPTIONS] [--] [REFERENCE CANDIDATE]
//
// Arguments after `--` are sentences even when they start with `-`.
//
// Options:
//   --json                  One JSON object per pair
//   --chars                 Also print character-level similarity
//   -c, --confidence X      Blend character similarity with recognizer confidence X in [0, 1]
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

use pronounce_cli::report::{ReportOptions, ScoreReport};

fn main() {
    pronounce_cli::trace_init::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (args, operands) = pronounce_cli::split_operands(&args);

    if pronounce_cli::wants_help(&args) {
        println!("pronounce-score: Score a spoken sentence against a reference.");
        println!();
        println!("Usage: pronounce-score [OPTIONS] [--] [REFERENCE CANDIDATE]");
        println!();
        println!("If REFERENCE and CANDIDATE are given, scores that pair.");
        println!("Otherwise reads tab-separated pairs from stdin (one per line).");
        println!("Use -- before sentences that start with '-'.");
        println!();
        println!("Options:");
        println!("  --json                Print one JSON object per pair");
        println!("  --chars               Also print character-level similarity");
        println!("  -c, --confidence X    Blend similarity with recognizer confidence X (0..1)");
        println!("  -h, --help            Print this help");
        return;
    }

    let (confidence, mut args) = pronounce_cli::parse_option(&args, "--confidence", "-c")
        .unwrap_or_else(|e| pronounce_cli::fatal(&e));
    let json = pronounce_cli::take_flag(&mut args, "--json");
    let chars = pronounce_cli::take_flag(&mut args, "--chars");

    let confidence = confidence.map(|c| {
        c.parse::<f64>()
            .unwrap_or_else(|_| pronounce_cli::fatal("invalid number for --confidence"))
    });
    let options = ReportOptions { chars, confidence };

    if let Some(unknown) = args.iter().find(|a| a.starts_with('-') && a.len() > 1) {
        pronounce_cli::fatal(&format!("unknown option {unknown}"));
    }
    args.extend(operands);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let emit = |reference: &str, candidate: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        let report = ScoreReport::build(reference, candidate, options)
            .unwrap_or_else(|e| pronounce_cli::fatal(&e.to_string()));
        if json {
            let line = report
                .to_json()
                .unwrap_or_else(|e| pronounce_cli::fatal(&format!("failed to encode JSON: {e}")));
            let _ = writeln!(out, "{line}");
        } else {
            let _ = write!(out, "{}", report.to_plain());
        }
    };

    match args.as_slice() {
        [reference, candidate] => emit(reference, candidate, &mut out),
        [] => {
            let stdin = io::stdin();
            for (lineno, line) in stdin.lock().lines().enumerate() {
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
                match line.split_once('\t') {
                    Some((reference, candidate)) => emit(reference, candidate, &mut out),
                    None => {
                        tracing::warn!(line = lineno + 1, "expected reference<TAB>candidate");
                    }
                }
            }
        }
        _ => pronounce_cli::fatal("expected exactly two sentences: REFERENCE CANDIDATE"),
    }
}
