use std::{
    fs::File,
    io::{self, BufRead, BufReader, Lines},
    path::Path,
};

use anyhow::Context;

/// Words from a word-list file, one per non-empty line, in file order.
pub struct WordList<R> {
    lines: Lines<R>,
}

impl WordList<BufReader<File>> {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path).with_context(|| format!("Invalid file {}", path.display()))?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> WordList<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for WordList<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Ok(line) => {
                    let word = line.trim();
                    if !word.is_empty() {
                        return Some(Ok(word.to_owned()));
                    }
                }
                Err(error) => return Some(Err(error)),
            }
        }
    }
}
