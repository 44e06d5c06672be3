//! Reading and writing hexagon files.
//!
//! Wraps [`HexagonCollection::parse_all`] and [`HexagonCollection::serialize_all`]
//! with file I/O. A failed load leaves the collection as it was; a failed save
//! never touches it.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use bevy::prelude::*;

use crate::collection::{HexagonCollection, ParseReport};
use crate::error::StorageError;

/// Extension appended by [`with_default_extension`].
pub const DEFAULT_EXTENSION: &str = "csv";

/// Extensions offered by the file dialogs of the editor. Others still work.
const KNOWN_EXTENSIONS: [&str; 2] = ["csv", "txt"];

/// All lines of a UTF-8 text file.
pub fn read_lines(path: &Path) -> Result<Vec<String>, StorageError> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => StorageError::NotFound(path.to_path_buf()),
        _ => StorageError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    Ok(text.lines().map(str::to_owned).collect())
}

/// Writes each line followed by `\n`, replacing any existing file.
pub fn write_lines<I, S>(path: &Path, lines: I) -> Result<(), StorageError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let write_err = |source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut out = io::BufWriter::new(fs::File::create(path).map_err(write_err)?);
    for line in lines {
        writeln!(out, "{}", line.as_ref()).map_err(write_err)?;
    }
    out.flush().map_err(write_err)
}

/// Replaces `collection` with the records in the file at `path`.
///
/// Bad lines are reported in the returned [`ParseReport`]; only a file that
/// cannot be read at all is an error, and then `collection` is unchanged.
pub fn load(collection: &mut HexagonCollection, path: &Path) -> Result<ParseReport, StorageError> {
    warn_unknown_extension(path);
    let lines = read_lines(path)?;
    Ok(collection.parse_all(&lines))
}

/// Writes every hexagon of `collection` to `path`, one record per line.
pub fn save(collection: &HexagonCollection, path: &Path) -> Result<(), StorageError> {
    warn_unknown_extension(path);
    write_lines(path, collection.serialize_all())
}

/// `path` with `.csv` appended when it has no extension.
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}

/// Whether `path` ends in `.csv` or `.txt` (any case).
pub fn is_known_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            KNOWN_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

fn warn_unknown_extension(path: &Path) {
    if !is_known_extension(path) {
        warn!(
            "{} is not a .csv or .txt file; using it anyway",
            path.display()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hexagon::Hexagon;

    fn sample() -> HexagonCollection {
        let mut c = HexagonCollection::default();
        c.add(Hexagon::new(0.0, 0.0, 10.0, "blue", "A").unwrap());
        c.add(Hexagon::new(3.5, -3.0, 7.0, "yellow", "D").unwrap());
        c
    }

    #[test]
    fn save_writes_one_record_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        save(&sample(), &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "A,0,0,10,blue\nD,3.5,-3,7,yellow\n");
    }

    #[test]
    fn save_then_load_restores_items() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("round.txt");
        let original = sample();
        save(&original, &path).unwrap();

        let mut loaded = HexagonCollection::default();
        loaded.add(Hexagon::default());
        loaded.select(Some(0)).unwrap();
        let report = load(&mut loaded, &path).unwrap();

        assert_eq!(report.accepted, 2);
        assert!(report.warnings.is_empty());
        assert_eq!(loaded, original);
    }

    #[test]
    fn load_reports_bad_lines_and_keeps_good_ones() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mixed.csv");
        fs::write(
            &path,
            "A,0,0,10,blue\nB,1,1,-5,red\n\nC,x,2,5,green\nD,3,3,7,yellow\n",
        )
        .unwrap();

        let mut c = HexagonCollection::default();
        let report = load(&mut c, &path).unwrap();
        assert_eq!(c.serialize_all(), vec!["A,0,0,10,blue", "D,3,3,7,yellow"]);
        let lines: Vec<usize> = report.warnings.iter().map(|w| w.line).collect();
        assert_eq!(lines, vec![2, 4]);
    }

    #[test]
    fn load_missing_file_leaves_collection_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let mut c = sample();
        c.select(Some(1)).unwrap();
        let before = c.clone();

        let err = load(&mut c, &path).unwrap_err();
        assert!(matches!(err, StorageError::NotFound(p) if p == path));
        assert_eq!(c, before);
    }

    #[test]
    fn load_directory_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut c = sample();
        let err = load(&mut c, dir.path()).unwrap_err();
        assert!(matches!(err, StorageError::Read { .. }));
        assert_eq!(c, sample());
    }

    #[test]
    fn save_into_missing_directory_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.csv");
        let err = save(&sample(), &path).unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
    }

    #[test]
    fn read_lines_handles_crlf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crlf.csv");
        fs::write(&path, "A,0,0,1,red\r\nB,0,0,2,blue\r\n").unwrap();
        assert_eq!(read_lines(&path).unwrap(), vec!["A,0,0,1,red", "B,0,0,2,blue"]);
    }

    #[test]
    fn default_extension_only_when_missing() {
        assert_eq!(
            with_default_extension(Path::new("shapes")),
            PathBuf::from("shapes.csv")
        );
        assert_eq!(
            with_default_extension(Path::new("shapes.txt")),
            PathBuf::from("shapes.txt")
        );
    }

    #[test]
    fn known_extensions_ignore_case() {
        assert!(is_known_extension(Path::new("a.csv")));
        assert!(is_known_extension(Path::new("a.TXT")));
        assert!(!is_known_extension(Path::new("a.json")));
        assert!(!is_known_extension(Path::new("a")));
    }
}
