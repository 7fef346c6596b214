use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordEntry {
    pub word: String,
    #[serde(default)]
    pub score: i64,
    #[serde(rename = "numSyllables", default)]
    pub num_syllables: Option<i64>,
    /// Each definition is `partOfSpeech\tdefinition`.
    #[serde(default)]
    pub defs: Vec<String>,
}

impl WordEntry {
    /// Syllable count, only when the service reported a positive one.
    pub fn syllables(&self) -> Option<i64> {
        self.num_syllables.filter(|&count| count > 0)
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Lookup,
    Synonym,
    Antonym,
}

impl Relation {
    pub fn query_param(self) -> &'static str {
        match self {
            Relation::Lookup => "sl",
            Relation::Synonym => "rel_syn",
            Relation::Antonym => "rel_ant",
        }
    }
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub relation: Relation,
    pub word: String,
}

impl Query {
    pub fn new(relation: Relation, word: impl Into<String>) -> Self {
        Self {
            relation,
            word: word.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let entries: Vec<WordEntry> = serde_json::from_str(r#"[{"word":"glad"}]"#).unwrap();
        assert_eq!(entries[0].word, "glad");
        assert_eq!(entries[0].score, 0);
        assert_eq!(entries[0].num_syllables, None);
        assert!(entries[0].defs.is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"[{"word":"joyful","score":3012,"numSyllables":2,"tags":["syn","adj"],"defs":["adj\tfull of joy"]}]"#;
        let entries: Vec<WordEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries[0].score, 3012);
        assert_eq!(entries[0].num_syllables, Some(2));
        assert_eq!(entries[0].defs, vec!["adj\tfull of joy".to_string()]);
    }

    #[test]
    fn zero_syllables_are_not_reported() {
        let entry = WordEntry {
            word: "hmm".to_string(),
            score: 0,
            num_syllables: Some(0),
            defs: vec![],
        };
        assert_eq!(entry.syllables(), None);
    }

    #[test]
    fn relations_map_to_query_params() {
        assert_eq!(Relation::Lookup.query_param(), "sl");
        assert_eq!(Relation::Synonym.query_param(), "rel_syn");
        assert_eq!(Relation::Antonym.query_param(), "rel_ant");
    }
}
