use crate::error::CliError;
use nalgebra::Point3;
use pairpot::core::models::particle::Position;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("Missing atom-count header line")]
    MissingHeader,

    #[error("Invalid atom count '{0}'")]
    InvalidCount(String),

    #[error("Line {line}: expected `symbol x y z`, got '{content}'")]
    MalformedRow { line: usize, content: String },

    #[error("Expected {expected} coordinate rows, found {found}")]
    CountMismatch { expected: usize, found: usize },
}

/// Reads an XYZ coordinate file: an atom-count line, a comment line, then
/// one `symbol x y z` row per atom. The species symbol is accepted but
/// ignored; the evaluation core is single-species.
pub fn read_xyz(path: &Path) -> Result<Vec<Position>, CliError> {
    let content = std::fs::read_to_string(path)?;
    parse_xyz(&content).map_err(|source| CliError::FileParsing {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_xyz(content: &str) -> Result<Vec<Position>, XyzError> {
    let mut lines = content.lines();

    let header = lines.next().ok_or(XyzError::MissingHeader)?;
    let expected: usize = header
        .trim()
        .parse()
        .map_err(|_| XyzError::InvalidCount(header.trim().to_string()))?;

    // Comment line; its content is irrelevant.
    lines.next();

    let mut positions = Vec::with_capacity(expected);
    for (idx, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        // Line numbers are 1-based and account for the two header lines.
        let line_number = idx + 3;

        let mut fields = line.split_whitespace();
        let _symbol = fields.next().ok_or_else(|| XyzError::MalformedRow {
            line: line_number,
            content: line.to_string(),
        })?;

        let mut coords = [0.0_f64; 3];
        for coord in coords.iter_mut() {
            *coord = fields
                .next()
                .and_then(|field| field.parse().ok())
                .ok_or_else(|| XyzError::MalformedRow {
                    line: line_number,
                    content: line.to_string(),
                })?;
        }
        positions.push(Point3::new(coords[0], coords[1], coords[2]));
    }

    if positions.len() != expected {
        return Err(XyzError::CountMismatch {
            expected,
            found: positions.len(),
        });
    }
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_well_formed_file() {
        let content = "2\nargon dimer\nAr 0.0 0.0 0.0\nAr 3.4 0.0 0.0\n";
        let positions = parse_xyz(content).unwrap();
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[1], Point3::new(3.4, 0.0, 0.0));
    }

    #[test]
    fn parses_empty_configuration() {
        let positions = parse_xyz("0\nempty\n").unwrap();
        assert!(positions.is_empty());
    }

    #[test]
    fn rejects_empty_file() {
        assert!(matches!(parse_xyz(""), Err(XyzError::MissingHeader)));
    }

    #[test]
    fn rejects_non_numeric_count() {
        assert!(matches!(
            parse_xyz("two\ncomment\n"),
            Err(XyzError::InvalidCount(_))
        ));
    }

    #[test]
    fn rejects_malformed_coordinate_row() {
        let content = "1\ncomment\nAr 0.0 oops 0.0\n";
        assert!(matches!(
            parse_xyz(content),
            Err(XyzError::MalformedRow { line: 3, .. })
        ));
    }

    #[test]
    fn rejects_row_count_mismatch() {
        let content = "3\ncomment\nAr 0.0 0.0 0.0\n";
        assert!(matches!(
            parse_xyz(content),
            Err(XyzError::CountMismatch {
                expected: 3,
                found: 1
            })
        ));
    }

    #[test]
    fn read_xyz_reports_missing_file_as_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.xyz");
        assert!(matches!(read_xyz(&path), Err(CliError::Io(_))));
    }

    #[test]
    fn read_xyz_wraps_parse_failures_with_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.xyz");
        fs::write(&path, "not a number\n").unwrap();
        assert!(matches!(
            read_xyz(&path),
            Err(CliError::FileParsing { .. })
        ));
    }
}
