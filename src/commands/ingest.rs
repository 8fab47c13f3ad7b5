use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use regex::Regex;
use tracing::{info, warn};

use crate::cli::IngestArgs;
use crate::model::{DayEntry, ReadingPlan};
use crate::refs::ReferenceParser;
use crate::util::write_json_pretty;

pub fn run(args: IngestArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let parser = ReferenceParser::new()?;
    let entries = extract_day_entries(&raw, args.max_day, &parser)?;
    if entries.is_empty() {
        bail!("no day entries found in {}", args.input.display());
    }

    let plan = ReadingPlan {
        id: args.plan_id.clone(),
        name: args.name,
        days: args.max_day,
        source: args.source,
        entries,
    };

    let output_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{}.json", args.plan_id)));
    write_json_pretty(&output_path, &plan)?;

    info!(
        path = %output_path.display(),
        entry_count = plan.entries.len(),
        "wrote reading plan"
    );

    Ok(())
}

fn extract_day_entries(raw: &str, max_day: u32, parser: &ReferenceParser) -> Result<Vec<DayEntry>> {
    let markup_tag = Regex::new(r"<[^>]+>").context("failed to compile markup tag regex")?;
    let day_heading =
        Regex::new(r"\bDay\s+(\d+)\b").context("failed to compile day heading regex")?;

    let stripped = markup_tag.replace_all(raw, " ");
    let text = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    let headings: Vec<(usize, usize, u32)> = day_heading
        .captures_iter(&text)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            let day = captures.get(1)?.as_str().parse::<u32>().ok()?;
            Some((whole.start(), whole.end(), day))
        })
        .collect();

    let mut entries = Vec::new();
    let mut seen_days = HashSet::new();
    for (index, (_, body_start, day)) in headings.iter().enumerate() {
        if *day > max_day {
            break;
        }

        let body_end = headings.get(index + 1).map_or(text.len(), |next| next.0);
        let reading = text[*body_start..body_end].trim();

        if !seen_days.insert(*day) {
            warn!(day, "duplicate day heading, keeping first occurrence");
            continue;
        }

        let chapters: Vec<String> = parser
            .normalize_day_text(reading)
            .iter()
            .map(ToString::to_string)
            .collect();
        if chapters.is_empty() {
            warn!(day, reading, "day text produced no chapters");
            continue;
        }

        entries.push(DayEntry { day: *day, chapters });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> ReferenceParser {
        ReferenceParser::new().expect("reference parser")
    }

    #[test]
    fn extracts_day_blocks_from_marked_up_text() {
        let raw = "<ul><li>Day 1 Genesis 1-3</li><li>Day 2 Genesis 4-7</li></ul>";

        let entries = extract_day_entries(raw, 365, &parser()).expect("entries");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].day, 1);
        assert_eq!(entries[0].chapters, vec!["1:1", "1:2", "1:3"]);
        assert_eq!(entries[1].day, 2);
        assert_eq!(entries[1].chapters, vec!["1:4", "1:5", "1:6", "1:7"]);
    }

    #[test]
    fn stops_at_max_day() {
        let raw = "Day 1 Genesis 1 Day 2 Genesis 2 Day 3 Genesis 3";

        let entries = extract_day_entries(raw, 2, &parser()).expect("entries");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.last().map(|entry| entry.day), Some(2));
    }

    #[test]
    fn skips_days_without_recognizable_chapters() {
        let raw = "Day 1 Introduction and overview Day 2 Exodus 4-6";

        let entries = extract_day_entries(raw, 365, &parser()).expect("entries");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].day, 2);
        assert_eq!(entries[0].chapters, vec!["2:4", "2:5", "2:6"]);
    }

    #[test]
    fn keeps_first_occurrence_of_duplicate_days() {
        let raw = "Day 1 Genesis 1 Day 1 Exodus 2";

        let entries = extract_day_entries(raw, 365, &parser()).expect("entries");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].chapters, vec!["1:1"]);
    }
}
