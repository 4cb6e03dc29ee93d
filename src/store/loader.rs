use super::{InMemoryStore, InMemoryStoreBuilder, StoreError};
use crate::window::Strand;
use std::io::BufRead;

/// Load a bedGraph-style file (`chrom start end score`) as a display store.
///
/// Records on other sequences are ignored.
pub fn load_bedgraph<R: BufRead>(
    name: &str,
    reader: R,
    sequence: &str,
) -> Result<InMemoryStore, StoreError> {
    let mut builder = InMemoryStoreBuilder::new(name);

    for_each_record(reader, |line, fields| {
        if fields.len() < 4 {
            return Err(StoreError::Parse {
                line,
                message: format!("expected 4 columns, found {}", fields.len()),
            });
        }
        if fields[0] != sequence {
            return Ok(());
        }
        let (start, end) = parse_span(line, fields[1], fields[2])?;
        let score = parse_score(line, fields[3])?;
        builder
            .add_feature(start, end, score, Strand::Unknown)
            .map_err(|e| at_line(line, e))
    })?;

    Ok(builder.build())
}

/// Load a BED-style file (`chrom start end [name [score [strand]]]`) as a
/// region store. Missing or `.` scores become 0.
pub fn load_bed<R: BufRead>(
    name: &str,
    reader: R,
    sequence: &str,
) -> Result<InMemoryStore, StoreError> {
    let mut builder = InMemoryStoreBuilder::new(name);

    for_each_record(reader, |line, fields| {
        if fields.len() < 3 {
            return Err(StoreError::Parse {
                line,
                message: format!("expected at least 3 columns, found {}", fields.len()),
            });
        }
        if fields[0] != sequence {
            return Ok(());
        }
        let (start, end) = parse_span(line, fields[1], fields[2])?;
        let score = match fields.get(4) {
            Some(&".") | None => 0.0,
            Some(raw) => parse_score(line, raw)?,
        };
        let strand = fields
            .get(5)
            .map(|s| Strand::from_token(s))
            .unwrap_or(Strand::Unknown);
        builder
            .add_feature(start, end, score, strand)
            .map_err(|e| at_line(line, e))
    })?;

    Ok(builder.build())
}

/// Feed every data line (1-based line number, whitespace-split fields) to `f`
fn for_each_record<R, F>(reader: R, mut f: F) -> Result<(), StoreError>
where
    R: BufRead,
    F: FnMut(usize, &[&str]) -> Result<(), StoreError>,
{
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || is_header(trimmed) {
            continue;
        }
        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        f(idx + 1, &fields)?;
    }
    Ok(())
}

fn is_header(line: &str) -> bool {
    line.starts_with('#') || line.starts_with("track") || line.starts_with("browser")
}

fn parse_span(line: usize, start: &str, end: &str) -> Result<(i64, i64), StoreError> {
    let parse = |raw: &str| {
        raw.parse::<i64>().map_err(|_| StoreError::Parse {
            line,
            message: format!("invalid coordinate '{}'", raw),
        })
    };
    Ok((parse(start)?, parse(end)?))
}

fn parse_score(line: usize, raw: &str) -> Result<f64, StoreError> {
    raw.parse::<f64>().map_err(|_| StoreError::Parse {
        line,
        message: format!("invalid score '{}'", raw),
    })
}

fn at_line(line: usize, err: StoreError) -> StoreError {
    StoreError::Parse {
        line,
        message: err.to_string(),
    }
}
