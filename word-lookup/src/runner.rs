use std::{io::Write, path::PathBuf};

use anyhow::Context;
use dictionary::{Dictionary, DictionaryError, Query, Relation, WordEntry};
use tracing::{debug, info};

use crate::{output::print_entries, word_list::WordList};

pub trait Lookup {
    async fn lookup(&self, query: &Query) -> Result<Vec<WordEntry>, DictionaryError>;
}

impl Lookup for Dictionary {
    async fn lookup(&self, query: &Query) -> Result<Vec<WordEntry>, DictionaryError> {
        self.get_words(query).await
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub filename: PathBuf,
    pub synonyms: bool,
    pub antonyms: bool,
}

struct Request {
    query: Query,
    title: String,
    limit: usize,
}

fn requests_for(config: &Config, word: &str) -> Vec<Request> {
    let mut requests = vec![Request {
        query: Query::new(Relation::Lookup, word),
        title: format!("Getting word: '{word}'..."),
        limit: 1,
    }];
    if config.synonyms {
        requests.push(Request {
            query: Query::new(Relation::Synonym, word),
            title: format!("Synonyms for : '{word}'..."),
            limit: 0,
        });
    }
    if config.antonyms {
        requests.push(Request {
            query: Query::new(Relation::Antonym, word),
            title: format!("Antonyms for : '{word}'..."),
            limit: 0,
        });
    }
    requests
}

/// Looks up every word of the configured file, stopping at the first error.
pub async fn run(config: &Config, lookup: &impl Lookup, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(
        out,
        "Searching for the words in [{}] with synonyms=[{}] and antonyms=[{}]",
        config.filename.display(),
        config.synonyms,
        config.antonyms
    )?;

    let words = WordList::open(&config.filename)?;
    let mut count = 0;
    for word in words {
        let word = word.context("Problem scanning file")?;
        debug!(%word, "looking up");
        for request in requests_for(config, &word) {
            let entries = lookup.lookup(&request.query).await?;
            print_entries(out, Some(request.title.as_str()), &entries, request.limit)?;
        }
        out.flush()?;
        count += 1;
    }
    info!(count, "finished word list");

    writeln!(out, "\nDone!")?;
    Ok(())
}
