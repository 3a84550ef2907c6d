//! Where the initial animal names come from.
//!
//! A [`NameSource`] is a synchronous provider consulted once at startup.
//! The binary uses [`BuiltinSource`] unless a names file is configured, in
//! which case [`FileSource`] reads one name per line.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading seed names.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The names file could not be read.
    #[error("failed to read names from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The names file contained no names.
    #[error("{path} contains no animal names")]
    Empty { path: PathBuf },
}

/// A provider of the initial list of names.
pub trait NameSource {
    /// Returns the names in display order.
    fn load(&self) -> Result<Vec<String>, SourceError>;

    /// Short description for logs.
    fn describe(&self) -> String;
}

/// The names compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl NameSource for BuiltinSource {
    fn load(&self) -> Result<Vec<String>, SourceError> {
        Ok(ANIMALS.iter().map(|s| s.to_string()).collect())
    }

    fn describe(&self) -> String {
        "builtin".to_string()
    }
}

/// Names read from a text file, one per line.
///
/// Blank lines and lines starting with `#` are skipped.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NameSource for FileSource {
    fn load(&self) -> Result<Vec<String>, SourceError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let names: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        if names.is_empty() {
            return Err(SourceError::Empty {
                path: self.path.clone(),
            });
        }
        Ok(names)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Picks the file source when a path is given, the builtin list otherwise.
pub fn from_path(path: Option<&Path>) -> Box<dyn NameSource> {
    match path {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(BuiltinSource),
    }
}

const ANIMALS: &[&str] = &[
    "Aardvark",
    "Albatross",
    "Alligator",
    "Alpaca",
    "Ant",
    "Anteater",
    "Antelope",
    "Armadillo",
    "Baboon",
    "Badger",
    "Barracuda",
    "Bat",
    "Bear",
    "Beaver",
    "Bee",
    "Bison",
    "Boar",
    "Bobcat",
    "Buffalo",
    "Butterfly",
    "Camel",
    "Capybara",
    "Caribou",
    "Cat",
    "Caterpillar",
    "Cattle",
    "Chameleon",
    "Cheetah",
    "Chicken",
    "Chimpanzee",
    "Chinchilla",
    "Cobra",
    "Cormorant",
    "Coyote",
    "Crab",
    "Crane",
    "Crocodile",
    "Crow",
    "Deer",
    "Dingo",
    "Dog",
    "Dolphin",
    "Donkey",
    "Dove",
    "Dragonfly",
    "Duck",
    "Eagle",
    "Echidna",
    "Eel",
    "Elephant",
    "Elk",
    "Emu",
    "Falcon",
    "Ferret",
    "Finch",
    "Flamingo",
    "Fox",
    "Frog",
    "Gazelle",
    "Gecko",
    "Gerbil",
    "Giraffe",
    "Gnu",
    "Goat",
    "Goldfish",
    "Goose",
    "Gorilla",
    "Grasshopper",
    "Hamster",
    "Hare",
    "Hawk",
    "Hedgehog",
    "Heron",
    "Hippopotamus",
    "Hornet",
    "Horse",
    "Hummingbird",
    "Hyena",
    "Ibis",
    "Iguana",
    "Impala",
    "Jackal",
    "Jaguar",
    "Jellyfish",
    "Kangaroo",
    "Kingfisher",
    "Koala",
    "Komodo dragon",
    "Kookaburra",
    "Lemur",
    "Leopard",
    "Lion",
    "Llama",
    "Lobster",
    "Lynx",
    "Macaw",
    "Magpie",
    "Manatee",
    "Meerkat",
    "Mole",
    "Mongoose",
    "Monkey",
    "Moose",
    "Mosquito",
    "Mouse",
    "Narwhal",
    "Newt",
    "Nightingale",
    "Octopus",
    "Okapi",
    "Opossum",
    "Orangutan",
    "Ostrich",
    "Otter",
    "Owl",
    "Ox",
    "Panda",
    "Panther",
    "Parrot",
    "Peacock",
    "Pelican",
    "Penguin",
    "Pig",
    "Pigeon",
    "Platypus",
    "Porcupine",
    "Puffin",
    "Quail",
    "Rabbit",
    "Raccoon",
    "Rat",
    "Raven",
    "Reindeer",
    "Rhinoceros",
    "Salamander",
    "Salmon",
    "Scorpion",
    "Seahorse",
    "Seal",
    "Shark",
    "Sheep",
    "Skunk",
    "Sloth",
    "Snail",
    "Snake",
    "Snow leopard",
    "Sparrow",
    "Spider",
    "Squid",
    "Squirrel",
    "Starfish",
    "Stingray",
    "Swan",
    "Tapir",
    "Tiger",
    "Toad",
    "Tortoise",
    "Toucan",
    "Turkey",
    "Turtle",
    "Vulture",
    "Walrus",
    "Wasp",
    "Weasel",
    "Whale",
    "Wildcat",
    "Wolf",
    "Wolverine",
    "Wombat",
    "Woodpecker",
    "Yak",
    "Zebra",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_names_are_unique_ignoring_case() {
        let names = BuiltinSource.load().expect("builtin loads");
        let mut lowered: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();
        lowered.sort();
        lowered.dedup();
        assert_eq!(lowered.len(), names.len());
    }

    #[test]
    fn file_source_skips_blank_and_comment_lines() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "# mammals\nOtter\n\n  Badger  \n#Bird\nHeron").expect("write");

        let names = FileSource::new(file.path()).load().expect("loads");
        assert_eq!(names, vec!["Otter", "Badger", "Heron"]);
    }

    #[test]
    fn file_without_names_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "# nothing here\n\n").expect("write");

        let err = FileSource::new(file.path()).load().expect_err("empty");
        assert!(matches!(err, SourceError::Empty { .. }));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = FileSource::new("/definitely/not/here.txt")
            .load()
            .expect_err("missing");
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }

    #[test]
    fn from_path_prefers_file() {
        assert_eq!(from_path(None).describe(), "builtin");
        assert_eq!(from_path(Some(Path::new("names.txt"))).describe(), "names.txt");
    }
}
