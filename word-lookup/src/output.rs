use std::io::{self, Write};

use dictionary::WordEntry;

pub const NOT_FOUND: &str = "Sorry, could not find word";

/// Prints one lookup result. `limit` is the number of entries to show, 0 shows all of them.
pub fn print_entries(
    out: &mut impl Write,
    title: Option<&str>,
    entries: &[WordEntry],
    limit: usize,
) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "{NOT_FOUND}");
    }
    if let Some(title) = title {
        writeln!(out, "{title}")?;
    }
    let shown = if limit == 0 { entries.len() } else { limit };
    for entry in entries.iter().take(shown) {
        print_entry(out, entry)?;
    }
    Ok(())
}

fn print_entry(out: &mut impl Write, entry: &WordEntry) -> io::Result<()> {
    write!(out, "  {}", entry.word)?;
    if let Some(syllables) = entry.syllables() {
        write!(out, " ({syllables} syllables)")?;
    }
    writeln!(out)?;
    for definition in &entry.defs {
        writeln!(out, "\t{definition}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, num_syllables: Option<i64>, defs: &[&str]) -> WordEntry {
        WordEntry {
            word: word.to_string(),
            score: 0,
            num_syllables,
            defs: defs.iter().map(|def| def.to_string()).collect(),
        }
    }

    fn render(title: Option<&str>, entries: &[WordEntry], limit: usize) -> String {
        let mut out = Vec::new();
        print_entries(&mut out, title, entries, limit).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_word_with_syllables_and_definitions() {
        let entries = [entry("happy", Some(2), &["adj\tfeeling joy"])];
        assert_eq!(
            render(Some("Getting word: 'happy'..."), &entries, 1),
            "Getting word: 'happy'...\n  happy (2 syllables)\n\tadj\tfeeling joy\n"
        );
    }

    #[test]
    fn zero_or_missing_syllables_are_omitted() {
        let entries = [entry("hmm", Some(0), &[]), entry("brr", None, &[])];
        assert_eq!(render(None, &entries, 0), "  hmm\n  brr\n");
    }

    #[test]
    fn limit_one_shows_first_entry_only() {
        let entries = [
            entry("happy", Some(2), &["adj\tfeeling joy"]),
            entry("happi", None, &[]),
            entry("hapi", None, &[]),
        ];
        let output = render(None, &entries, 1);
        assert!(output.contains("happy"));
        assert!(!output.contains("happi"));
        assert!(!output.contains("hapi"));
    }

    #[test]
    fn limit_zero_shows_everything() {
        let entries: Vec<_> = ["glad", "joyful", "content", "cheerful", "merry"]
            .iter()
            .map(|word| entry(word, None, &[]))
            .collect();
        let output = render(Some("Synonyms for : 'happy'..."), &entries, 0);
        assert_eq!(output.lines().count(), 6);
        for word in ["glad", "joyful", "content", "cheerful", "merry"] {
            assert!(output.contains(&format!("  {word}\n")));
        }
    }

    #[test]
    fn limit_larger_than_result() {
        let entries = [entry("glad", None, &[])];
        assert_eq!(render(None, &entries, 5), "  glad\n");
    }

    #[test]
    fn empty_result_prints_apology_without_title() {
        assert_eq!(render(Some("Getting word: 'zzxq'..."), &[], 1), format!("{NOT_FOUND}\n"));
    }
}
