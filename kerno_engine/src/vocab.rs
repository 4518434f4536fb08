//! Vocabulary module
//!
//! Maps player input words onto a closed set of tokens and supplies the
//! display words and stock phrases for each supported language. The
//! interpreter only ever sees [`Token`]s, so a new language is a new table
//! here rather than a second interpreter.

use std::collections::HashMap;
use std::fmt;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use variantly::Variantly;

/// Languages the engine can speak.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Ido,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => write!(f, "english"),
            Language::Ido => write!(f, "ido"),
        }
    }
}

/// The fixed command verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    Look,
    Examine,
    Take,
    Drop,
    Use,
    Interact,
    Inventory,
    Status,
    Help,
    Quit,
}

impl Verb {
    /// All verbs, in the order they are offered to the player.
    pub const ALL: [Verb; 10] = [
        Verb::Look,
        Verb::Examine,
        Verb::Take,
        Verb::Drop,
        Verb::Use,
        Verb::Interact,
        Verb::Inventory,
        Verb::Status,
        Verb::Help,
        Verb::Quit,
    ];

    /// Canonical (English) key for this verb.
    pub fn key(self) -> &'static str {
        match self {
            Verb::Look => "look",
            Verb::Examine => "examine",
            Verb::Take => "take",
            Verb::Drop => "drop",
            Verb::Use => "use",
            Verb::Interact => "interact",
            Verb::Inventory => "inventory",
            Verb::Status => "status",
            Verb::Help => "help",
            Verb::Quit => "quit",
        }
    }
}

/// Movement directions. World data keys exits by the canonical key of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// Canonical exit key used in world data.
    pub fn key(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Parse a canonical exit key.
    pub fn from_key(key: &str) -> Option<Direction> {
        Direction::ALL.into_iter().find(|dir| dir.key() == key)
    }
}

/// What an input word means once resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum Token {
    Verb(Verb),
    Direction(Direction),
    Yes,
    No,
}

/// Stock phrases used when rendering locations and survival hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    YouCanSee,
    RoomContains,
    Exits,
    NoExits,
    PassageLeadsTo,
    PassageLeadsNowhere,
    HungerWarning,
    ThirstWarning,
    EnergyWarning,
    Goodbye,
    Death,
}

/// Input word table and display strings for one language.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    language: Language,
    words: HashMap<String, Token>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

impl Vocabulary {
    /// Build the stock vocabulary for a language.
    ///
    /// Every language also accepts the canonical English keys, so content and
    /// documentation written in English keep working.
    pub fn new(language: Language) -> Self {
        let mut vocab = Self {
            language,
            words: HashMap::new(),
        };
        vocab.insert_all(ENGLISH_WORDS);
        if language == Language::Ido {
            vocab.insert_all(IDO_WORDS);
        }
        info!("{} vocabulary built with {} words", language, vocab.words.len());
        vocab
    }

    fn insert_all(&mut self, table: &[(&str, Token)]) {
        for (word, token) in table {
            self.words.insert((*word).to_string(), *token);
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Resolve a single (already lowercased) input word.
    pub fn resolve(&self, word: &str) -> Option<Token> {
        self.words.get(word).copied()
    }

    /// Register `alias` as another spelling of whatever `existing` resolves to.
    ///
    /// Returns `false` (and leaves the table untouched) if `existing` is unknown.
    pub fn add_alias(&mut self, alias: &str, existing: &str) -> bool {
        let alias = alias.trim().to_lowercase();
        let Some(token) = self.resolve(&existing.trim().to_lowercase()) else {
            warn!("alias '{alias}' ignored: '{existing}' is not a known word");
            return false;
        };
        if alias.is_empty() || alias.contains(char::is_whitespace) {
            warn!("alias '{alias}' ignored: aliases must be a single word");
            return false;
        }
        info!("alias '{alias}' -> {token:?}");
        self.words.insert(alias, token);
        true
    }

    /// All recognized input words, sorted (used for tab completion).
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// Display word for a verb in the active language.
    pub fn verb_word(&self, verb: Verb) -> &'static str {
        match self.language {
            Language::English => verb.key(),
            Language::Ido => match verb {
                Verb::Look => "regardar",
                Verb::Examine => "examinar",
                Verb::Take => "prenar",
                Verb::Drop => "pozar",
                Verb::Use => "uzar",
                Verb::Interact => "interagar",
                Verb::Inventory => "inventario",
                Verb::Status => "statuso",
                Verb::Help => "helpo",
                Verb::Quit => "finar",
            },
        }
    }

    /// Display word for a direction in the active language.
    pub fn direction_word(&self, direction: Direction) -> &'static str {
        match self.language {
            Language::English => direction.key(),
            Language::Ido => match direction {
                Direction::North => "nordo",
                Direction::South => "sudo",
                Direction::East => "esto",
                Direction::West => "westo",
                Direction::Up => "supre",
                Direction::Down => "infre",
            },
        }
    }

    /// Display label for an exit key; unknown keys are shown as authored.
    pub fn exit_label(&self, key: &str) -> String {
        Direction::from_key(key).map_or_else(|| key.to_string(), |dir| self.direction_word(dir).to_string())
    }

    pub fn phrase(&self, phrase: Phrase) -> &'static str {
        match self.language {
            Language::English => match phrase {
                Phrase::YouCanSee => "You can see: ",
                Phrase::RoomContains => "The room contains: ",
                Phrase::Exits => "Exits: ",
                Phrase::NoExits => "There are no obvious exits.",
                Phrase::PassageLeadsTo => "You can go to: ",
                Phrase::PassageLeadsNowhere => "This passage seems to lead nowhere.",
                Phrase::HungerWarning => "Your stomach growls painfully. You need to find food soon.",
                Phrase::ThirstWarning => "Your mouth is dry. You desperately need water.",
                Phrase::EnergyWarning => "You feel exhausted. You should rest soon.",
                Phrase::Goodbye => "Thanks for playing! Until next time!",
                Phrase::Death => "Your strength gives out and the world goes dark. Your journey ends here.",
            },
            Language::Ido => match phrase {
                Phrase::YouCanSee => "Vu povas vidar: ",
                Phrase::RoomContains => "La chambro kontenas: ",
                Phrase::Exits => "Exiti: ",
                Phrase::NoExits => "Ne existas evidenta exiti.",
                Phrase::PassageLeadsTo => "Vu povas irar al: ",
                Phrase::PassageLeadsNowhere => "Ica pasejo semblas duktar nulaloke.",
                Phrase::HungerWarning => "Vua stomako dolorante grondas. Vu bezonas trovar nutrivo balde.",
                Phrase::ThirstWarning => "Vua boko esas sika. Vu desperate bezonas aquo.",
                Phrase::EnergyWarning => "Vu sentas exhaustita. Vu devus reposar balde.",
                Phrase::Goodbye => "Dankon pro ludado! Ĝis revido!",
                Phrase::Death => "Vua forco fini e la mondo obskureskas. Vua voyajo finas hike.",
            },
        }
    }
}

const ENGLISH_WORDS: &[(&str, Token)] = &[
    ("look", Token::Verb(Verb::Look)),
    ("examine", Token::Verb(Verb::Examine)),
    ("take", Token::Verb(Verb::Take)),
    ("drop", Token::Verb(Verb::Drop)),
    ("use", Token::Verb(Verb::Use)),
    ("interact", Token::Verb(Verb::Interact)),
    ("inventory", Token::Verb(Verb::Inventory)),
    ("status", Token::Verb(Verb::Status)),
    ("help", Token::Verb(Verb::Help)),
    ("quit", Token::Verb(Verb::Quit)),
    ("north", Token::Direction(Direction::North)),
    ("south", Token::Direction(Direction::South)),
    ("east", Token::Direction(Direction::East)),
    ("west", Token::Direction(Direction::West)),
    ("up", Token::Direction(Direction::Up)),
    ("down", Token::Direction(Direction::Down)),
    ("yes", Token::Yes),
    ("y", Token::Yes),
    ("no", Token::No),
];

const IDO_WORDS: &[(&str, Token)] = &[
    ("regardar", Token::Verb(Verb::Look)),
    ("examinar", Token::Verb(Verb::Examine)),
    ("prenar", Token::Verb(Verb::Take)),
    ("pozar", Token::Verb(Verb::Drop)),
    ("uzar", Token::Verb(Verb::Use)),
    ("interagar", Token::Verb(Verb::Interact)),
    ("inventario", Token::Verb(Verb::Inventory)),
    ("statuso", Token::Verb(Verb::Status)),
    ("helpo", Token::Verb(Verb::Help)),
    ("finar", Token::Verb(Verb::Quit)),
    ("nordo", Token::Direction(Direction::North)),
    ("sudo", Token::Direction(Direction::South)),
    ("esto", Token::Direction(Direction::East)),
    ("westo", Token::Direction(Direction::West)),
    ("supre", Token::Direction(Direction::Up)),
    ("infre", Token::Direction(Direction::Down)),
    ("si", Token::Yes),
];
