// pronounce-cli: shared utilities for CLI tools.

pub mod report;
pub mod trace_init;

use std::path::PathBuf;
use std::process;

use pronounce_trie::Vocabulary;

/// Word list compiled into the binaries, used when no file is found.
pub const BUNDLED_WORDS: &str = include_str!("../data/common_words.txt");

/// Word list file name looked up in the search directories.
const WORDLIST_FILE: &str = "words.txt";

/// Per-user directory name under `$HOME`.
const USER_DIR: &str = ".pronounce";

/// Environment variable naming an explicit word list file.
pub const WORDLIST_ENV: &str = "PRONOUNCE_WORDLIST";

/// Where a vocabulary was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    File(PathBuf),
    Bundled,
}

impl std::fmt::Display for WordSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WordSource::File(path) => write!(f, "{}", path.display()),
            WordSource::Bundled => f.write_str("bundled word list"),
        }
    }
}

/// Search for a word list and build the vocabulary.
///
/// Search order:
/// 1. `wordlist` argument (if provided; it must exist)
/// 2. `PRONOUNCE_WORDLIST` environment variable
/// 3. `~/.pronounce/words.txt`
/// 4. `words.txt` in the current working directory
/// 5. The bundled list compiled into the binary
pub fn load_vocabulary(wordlist: Option<&str>) -> Result<(Vocabulary, WordSource), String> {
    if let Some(p) = wordlist {
        let path = PathBuf::from(p);
        let text = std::fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        return Ok((vocabulary_from_text(&text), WordSource::File(path)));
    }

    for path in build_search_paths() {
        if path.is_file() {
            let text = std::fs::read_to_string(&path)
                .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
            tracing::debug!(path = %path.display(), "loading word list");
            return Ok((vocabulary_from_text(&text), WordSource::File(path)));
        }
    }

    tracing::debug!("no word list file found, using bundled words");
    Ok((vocabulary_from_text(BUNDLED_WORDS), WordSource::Bundled))
}

/// Build the list of word list files to try, most specific first.
fn build_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(env_path) = std::env::var(WORDLIST_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(USER_DIR).join(WORDLIST_FILE));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(WORDLIST_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Entries of a word list: trimmed, lower-cased, comments and blanks dropped.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

/// Build a vocabulary from word list text, skipping entries that are not
/// plain lower-case words.
pub fn vocabulary_from_text(text: &str) -> Vocabulary {
    let mut vocab = Vocabulary::new();
    let mut skipped = 0usize;
    for word in parse_word_list(text) {
        if let Err(e) = vocab.insert(&word) {
            tracing::warn!(%word, error = %e, "skipping word list entry");
            skipped += 1;
        }
    }
    tracing::debug!(words = vocab.len(), skipped, "vocabulary ready");
    vocab
}

/// Extract a `--long=VALUE`, `--long VALUE` or `-s VALUE` option from args.
///
/// Returns `(value, remaining_args)`. The last occurrence wins.
pub fn parse_option(
    args: &[String],
    long: &str,
    short: &str,
) -> Result<(Option<String>, Vec<String>), String> {
    let mut value = None;
    let mut remaining = Vec::new();
    let prefix = format!("{long}=");
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix(prefix.as_str()) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            match iter.next() {
                Some(val) => value = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((value, remaining))
}

/// Split args at the first `--`.
///
/// Returns `(options, operands)`. Everything after `--` is an operand even
/// if it starts with `-`.
pub fn split_operands(args: &[String]) -> (Vec<String>, Vec<String>) {
    match args.iter().position(|a| a == "--") {
        Some(i) => (args[..i].to_vec(), args[i + 1..].to_vec()),
        None => (args.to_vec(), Vec::new()),
    }
}

/// Remove a boolean flag from args, reporting whether it was present.
pub fn take_flag(args: &mut Vec<String>, long: &str) -> bool {
    let before = args.len();
    args.retain(|a| a != long);
    args.len() != before
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
