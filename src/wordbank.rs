use crate::error::HangmanError;
use crate::info_log;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");

const DATA_DIR_NAME: &str = "hangman-player";
const DICTIONARY_FILE_NAME: &str = "dictionary.txt";

/// Something that can list candidate words, from the start, as often as asked.
pub trait WordSource {
    fn words(&self) -> Result<Vec<String>, HangmanError>;
}

/// Newline-delimited word list on disk.
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileWordSource {
    fn words(&self) -> Result<Vec<String>, HangmanError> {
        load_wordbank_from_file(&self.path)
    }
}

/// Word list held in memory, such as the embedded dictionary.
#[derive(Debug, Clone, Copy)]
pub struct StrWordSource {
    data: &'static str,
}

impl StrWordSource {
    pub const fn new(data: &'static str) -> Self {
        Self { data }
    }

    pub const fn embedded() -> Self {
        Self::new(EMBEDDED_DICTIONARY)
    }
}

impl WordSource for StrWordSource {
    fn words(&self) -> Result<Vec<String>, HangmanError> {
        Ok(load_wordbank_from_str(self.data))
    }
}

fn normalize(line: &str) -> Option<String> {
    let word = line.trim();
    if word.is_empty() {
        None
    } else {
        Some(word.to_lowercase())
    }
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, HangmanError> {
    let path = path.as_ref();
    let load_error = |e: std::io::Error| HangmanError::DictionaryLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };
    let file = File::open(path).map_err(load_error)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize(&line.map_err(load_error)?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Per-user dictionary location, e.g. `~/.local/share/hangman-player/dictionary.txt`.
pub fn get_user_dictionary_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(DATA_DIR_NAME).join(DICTIONARY_FILE_NAME))
}

/// Resolve the dictionary to play with.
///
/// An explicit path always wins, even if it does not exist (loading will then fail).
/// Otherwise the per-user dictionary is used when present, then the embedded one.
pub fn default_word_source(explicit: Option<&Path>) -> Box<dyn WordSource> {
    if let Some(path) = explicit {
        info_log!("Using dictionary {}", path.display());
        return Box::new(FileWordSource::new(path));
    }
    if let Some(path) = get_user_dictionary_path()
        && path.is_file()
    {
        info_log!("Using user dictionary {}", path.display());
        return Box::new(FileWordSource::new(path));
    }
    info_log!("Using embedded dictionary");
    Box::new(StrWordSource::embedded())
}
