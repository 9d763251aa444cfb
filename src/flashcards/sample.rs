//! Built-in cards served when no data file can be loaded

use indexmap::IndexMap;

use super::models::{Card, ConjugationTable, ExampleSentence};

/// Person keys in display order
const PERSONS: [&str; 6] = ["he", "she", "you_m", "you_f", "we", "they"];

fn conjugation_table(forms: [&str; 6]) -> ConjugationTable {
    PERSONS
        .iter()
        .zip(forms)
        .map(|(person, form)| (person.to_string(), form.to_string()))
        .collect()
}

fn verb(
    (english, arabic, pronunciation): (&str, &str, &str),
    past: [&str; 6],
    present: [&str; 6],
    past_example: ExampleSentence,
    present_example: ExampleSentence,
) -> Card {
    let mut card = Card::new(english, arabic, "Form I", pronunciation);

    card.conjugations = IndexMap::from([
        ("past".to_string(), conjugation_table(past)),
        ("present".to_string(), conjugation_table(present)),
    ]);
    card.example_sentences = IndexMap::from([
        ("past".to_string(), vec![past_example]),
        ("present".to_string(), vec![present_example]),
    ]);

    card
}

/// The three fallback verbs: to write, to read, to study.
pub fn sample_cards() -> Vec<Card> {
    vec![
        verb(
            ("to write", "كَتَبَ", "kataba"),
            ["كَتَبَ", "كَتَبَتْ", "كَتَبْتَ", "كَتَبْتِ", "كَتَبْنَا", "كَتَبُوا"],
            ["يَكْتُبُ", "تَكْتُبُ", "تَكْتُبُ", "تَكْتُبِينَ", "نَكْتُبُ", "يَكْتُبُونَ"],
            ExampleSentence::new(
                "كَتَبَ الطَّالِبُ الدَّرْسَ",
                "The student wrote the lesson.",
                "kataba at-taalibu ad-darsa",
            ),
            ExampleSentence::new(
                "يَكْتُبُ أَحْمَدُ رِسَالَةً",
                "Ahmad writes a letter.",
                "yaktubu ahmadu risaalatan",
            ),
        ),
        verb(
            ("to read", "قَرَأَ", "qara'a"),
            ["قَرَأَ", "قَرَأَتْ", "قَرَأْتَ", "قَرَأْتِ", "قَرَأْنَا", "قَرَأُوا"],
            ["يَقْرَأُ", "تَقْرَأُ", "تَقْرَأُ", "تَقْرَئِينَ", "نَقْرَأُ", "يَقْرَؤُونَ"],
            ExampleSentence::new(
                "قَرَأَتْ مَرْيَمُ الْكِتَابَ",
                "Maryam read the book.",
                "qara'at maryamu al-kitaaba",
            ),
            ExampleSentence::new(
                "نَقْرَأُ الْجَرِيدَةَ كُلَّ يَوْمٍ",
                "We read the newspaper every day.",
                "naqra'u al-jariidata kulla yawmin",
            ),
        ),
        verb(
            ("to study", "دَرَسَ", "darasa"),
            ["دَرَسَ", "دَرَسَتْ", "دَرَسْتَ", "دَرَسْتِ", "دَرَسْنَا", "دَرَسُوا"],
            ["يَدْرُسُ", "تَدْرُسُ", "تَدْرُسُ", "تَدْرُسِينَ", "نَدْرُسُ", "يَدْرُسُونَ"],
            ExampleSentence::new(
                "دَرَسْتُ الْعَرَبِيَّةَ فِي الْجَامِعَةِ",
                "I studied Arabic at the university.",
                "darastu al-'arabiyyata fi al-jaami'ati",
            ),
            ExampleSentence::new(
                "يَدْرُسُونَ فِي الْمَكْتَبَةِ",
                "They study in the library.",
                "yadrusuuna fi al-maktabati",
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_order() {
        let english: Vec<String> = sample_cards().into_iter().map(|c| c.english).collect();
        assert_eq!(english, vec!["to write", "to read", "to study"]);
    }

    #[test]
    fn test_sample_fully_populated() {
        for card in sample_cards() {
            assert!(!card.arabic.is_empty());
            assert_eq!(card.form, "Form I");
            assert!(!card.pronunciation.is_empty());

            for tense in ["past", "present"] {
                let table = &card.conjugations[tense];
                let persons: Vec<&str> = table.keys().map(String::as_str).collect();
                assert_eq!(persons, PERSONS);
                assert!(table.values().all(|form| !form.is_empty()));

                let examples = &card.example_sentences[tense];
                assert!(!examples.is_empty());
                assert!(examples.iter().all(|s| !s.arabic.is_empty()
                    && !s.english.is_empty()
                    && !s.pronunciation.is_empty()));
            }
        }
    }
}
