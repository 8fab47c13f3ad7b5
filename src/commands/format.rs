use std::io::{self, Write};

use anyhow::Result;
use tracing::info;

use crate::cli::FormatArgs;
use crate::model::parse_interchange;
use crate::refs::format_chapters;

pub fn run(args: FormatArgs) -> Result<()> {
    let chapters = parse_interchange(&args.chapters)?;
    info!(
        chapter_count = chapters.len(),
        locale = args.locale.as_str(),
        "formatting chapter list"
    );

    let rendered = format_chapters(&chapters, args.locale);

    let mut output = io::BufWriter::new(io::stdout().lock());
    writeln!(output, "{rendered}")?;
    output.flush()?;

    Ok(())
}
