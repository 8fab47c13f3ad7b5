use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Error, anyhow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChapterRef {
    pub book: u32,
    pub chapter: u32,
}

impl fmt::Display for ChapterRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.book, self.chapter)
    }
}

impl FromStr for ChapterRef {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (book, chapter) = value
            .split_once(':')
            .ok_or_else(|| anyhow!("chapter reference missing ':': {value:?}"))?;

        let book = book
            .trim()
            .parse()
            .with_context(|| format!("invalid book number in chapter reference {value:?}"))?;
        let chapter = chapter
            .trim()
            .parse()
            .with_context(|| format!("invalid chapter number in chapter reference {value:?}"))?;

        Ok(Self { book, chapter })
    }
}

pub fn parse_interchange(values: &[String]) -> Result<Vec<ChapterRef>, Error> {
    values.iter().map(|value| value.parse()).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayEntry {
    pub day: u32,
    pub chapters: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingPlan {
    pub id: String,
    pub name: String,
    pub days: u32,
    pub source: String,
    pub entries: Vec<DayEntry>,
}
