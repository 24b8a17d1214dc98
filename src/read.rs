use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use fi_lemma::error::{Error, IoError};

/// Line source for the binary: a file, or standard input.
pub struct LineReader {
    inner: Box<dyn BufRead>,
}

impl LineReader {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        match File::open(path) {
            Ok(file) => Ok(Self::from_reader(BufReader::new(file))),
            Err(error) => Err(IoError::File(error.kind()).into()),
        }
    }

    #[inline]
    pub fn stdin() -> Self {
        Self::from_reader(io::stdin().lock())
    }

    pub fn open_or_stdin<P: AsRef<Path>>(path: Option<P>) -> Result<Self, Error> {
        match path {
            Some(path) => Self::open(path),
            None => Ok(Self::stdin()),
        }
    }

    #[inline]
    pub fn from_reader<R: BufRead + 'static>(reader: R) -> Self {
        Self {
            inner: Box::new(reader),
        }
    }

    pub fn lines(self) -> impl Iterator<Item = Result<String, Error>> {
        self.inner
            .lines()
            .map(|line| line.map_err(|error| IoError::Reader(error.kind()).into()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use fi_lemma::error::{Error, IoError};

    use crate::read::LineReader;

    #[test]
    fn test_reader_lines() {
        let reader = LineReader::from_reader(Cursor::new("talossa\nvalikon\tNOUN\n"));
        let lines = reader.lines().collect::<Result<Vec<_>, _>>().unwrap();

        assert_eq!(lines, vec!["talossa", "valikon\tNOUN"]);
    }

    #[test]
    fn test_reader_missing_file() {
        let result = LineReader::open("tests/data/missing.conllu");

        assert!(matches!(
            result,
            Err(Error::Io(IoError::File(std::io::ErrorKind::NotFound)))
        ));
    }
}
