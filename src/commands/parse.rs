use std::fs;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::ParseArgs;
use crate::refs::ReferenceParser;

pub fn run(args: ParseArgs) -> Result<()> {
    let text = match (args.text, args.input) {
        (Some(text), _) => text,
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read citation text from stdin")?;
            buffer
        }
    };

    let parser = ReferenceParser::new()?;
    let references = parser.normalize_day_text(&text);
    info!(reference_count = references.len(), "normalized day text");

    let rendered: Vec<String> = references.iter().map(ToString::to_string).collect();

    let mut output = io::BufWriter::new(io::stdout().lock());
    if args.json {
        serde_json::to_writer_pretty(&mut output, &rendered)
            .context("failed to serialize parse output")?;
        writeln!(output)?;
    } else {
        for reference in &rendered {
            writeln!(output, "{reference}")?;
        }
    }
    output.flush()?;

    Ok(())
}
