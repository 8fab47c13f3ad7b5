use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use tracing::info;

use crate::cli::ShowArgs;
use crate::model::{ReadingPlan, parse_interchange};
use crate::refs::{Locale, format_chapters};
use crate::util::read_json;

pub fn run(args: ShowArgs) -> Result<()> {
    let plan: ReadingPlan = read_json(&args.plan)?;
    info!(
        plan_id = %plan.id,
        entry_count = plan.entries.len(),
        locale = args.locale.as_str(),
        "loaded reading plan"
    );

    let shown = args.max_days.unwrap_or(plan.entries.len());

    let mut output = io::BufWriter::new(io::stdout().lock());
    writeln!(output, "{}", header_line(&plan.name, args.start_date, args.locale))?;
    writeln!(output)?;

    for entry in plan.entries.iter().take(shown) {
        let chapters = parse_interchange(&entry.chapters)
            .with_context(|| format!("invalid chapter list for day {}", entry.day))?;
        let reading = format_chapters(&chapters, args.locale);
        writeln!(
            output,
            "{}",
            day_line(entry.day, args.start_date, &reading, args.locale)
        )?;
    }
    output.flush()?;

    Ok(())
}

fn header_line(name: &str, start_date: Option<NaiveDate>, locale: Locale) -> String {
    match (locale, start_date) {
        (Locale::English, Some(start)) => format!("{name} (starting {start})"),
        (Locale::English, None) => name.to_string(),
        (_, Some(start)) => format!("【{name}】开始日期：{start}"),
        (_, None) => format!("【{name}】"),
    }
}

fn day_line(day: u32, start_date: Option<NaiveDate>, reading: &str, locale: Locale) -> String {
    let date = start_date
        .and_then(|start| start.checked_add_days(Days::new(u64::from(day.saturating_sub(1)))));

    match (locale, date) {
        (Locale::English, Some(date)) => format!("Day {day} ({date}): {reading}"),
        (Locale::English, None) => format!("Day {day}: {reading}"),
        (_, Some(date)) => format!("第{day}天（{date}）：{reading}"),
        (_, None) => format!("第{day}天：{reading}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> NaiveDate {
        value.parse().expect("date")
    }

    #[test]
    fn day_line_advances_one_day_per_entry() {
        let start = Some(date("2026-02-17"));

        assert_eq!(
            day_line(1, start, "Genesis 1-3", Locale::English),
            "Day 1 (2026-02-17): Genesis 1-3"
        );
        assert_eq!(
            day_line(3, start, "Genesis 7-9", Locale::English),
            "Day 3 (2026-02-19): Genesis 7-9"
        );
    }

    #[test]
    fn day_line_is_localized() {
        assert_eq!(
            day_line(3, Some(date("2026-02-17")), "创世记7-9", Locale::SimplifiedChinese),
            "第3天（2026-02-19）：创世记7-9"
        );
        assert_eq!(
            day_line(2, None, "創世記4-6", Locale::TraditionalChinese),
            "第2天：創世記4-6"
        );
    }

    #[test]
    fn header_line_mentions_start_date_when_given() {
        assert_eq!(
            header_line("Chronological Bible (1 Year)", Some(date("2026-02-17")), Locale::English),
            "Chronological Bible (1 Year) (starting 2026-02-17)"
        );
        assert_eq!(
            header_line("历史读经", None, Locale::SimplifiedChinese),
            "【历史读经】"
        );
    }
}
