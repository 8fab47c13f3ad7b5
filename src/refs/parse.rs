use std::collections::HashSet;

use anyhow::{Context, Result};
use regex::Regex;

use crate::model::ChapterRef;
use crate::refs::books::find_book;

pub struct ReferenceParser {
    clause_split: Regex,
    block_split: Regex,
    chapter_spec: Regex,
}

impl ReferenceParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            clause_split: Regex::new(r"(?i)[,;]| and ")
                .context("failed to compile clause split regex")?,
            block_split: Regex::new(r"\s*;\s*").context("failed to compile block split regex")?,
            chapter_spec: Regex::new(r"^(\d+)(?:\s*[-–—]\s*(\d+))?(?::\d+(?:-\d+)?)?")
                .context("failed to compile chapter spec regex")?,
        })
    }

    pub fn parse_reference(&self, clause: &str) -> Vec<ChapterRef> {
        let mut refs = Vec::new();

        for part in self.clause_split.split(clause) {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            let (book, rest) = find_book(part);
            let Some(book) = book else {
                continue;
            };

            if rest.is_empty() {
                refs.push(ChapterRef { book, chapter: 1 });
                continue;
            }

            let Some(captures) = self.chapter_spec.captures(rest) else {
                continue;
            };
            let Ok(start) = captures[1].parse::<u32>() else {
                continue;
            };
            let end = match captures.get(2) {
                Some(group) => match group.as_str().parse::<u32>() {
                    Ok(end) => end,
                    Err(_) => continue,
                },
                None => start,
            };

            for chapter in start..=end {
                refs.push(ChapterRef { book, chapter });
            }
        }

        refs
    }

    pub fn normalize_day_text(&self, text: &str) -> Vec<ChapterRef> {
        let text = text.replace(['–', '—'], "-");

        let mut seen = HashSet::new();
        let mut refs = Vec::new();
        for block in self.block_split.split(&text) {
            let block = block.trim();
            if block.is_empty() {
                continue;
            }
            for reference in self.parse_reference(block) {
                if seen.insert(reference) {
                    refs.push(reference);
                }
            }
        }

        refs
    }
}
