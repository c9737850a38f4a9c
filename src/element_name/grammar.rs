use serde::{Deserialize, Serialize};

/// A grammar of element names.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NameGrammar {
    /// Any non-empty sequence of characters that are neither control nor
    /// whitespace characters.
    Printable,
    /// An ASCII letter followed by characters other than ASCII whitespace,
    /// `/`, `>`, and NUL.
    Html,
    /// The XML `Name` production.
    #[default]
    Xml,
}

impl NameGrammar {
    /// Returns the position and value of the first character not allowed by
    /// the grammar, if any.
    pub fn find_invalid_character(self, name: &str) -> Option<(usize, char)> {
        name.chars().enumerate().find(|&(index, character)| {
            !if index == 0 {
                self.is_start_character(character)
            } else {
                self.is_character(character)
            }
        })
    }

    fn is_start_character(self, character: char) -> bool {
        match self {
            Self::Printable => is_printable(character),
            Self::Html => character.is_ascii_alphabetic(),
            Self::Xml => is_xml_name_start_character(character),
        }
    }

    fn is_character(self, character: char) -> bool {
        match self {
            Self::Printable => is_printable(character),
            Self::Html => !matches!(
                character,
                '\t' | '\n' | '\x0c' | '\r' | ' ' | '/' | '>' | '\0'
            ),
            Self::Xml => is_xml_name_character(character),
        }
    }
}

fn is_printable(character: char) -> bool {
    !character.is_control() && !character.is_whitespace()
}

const fn is_xml_name_start_character(character: char) -> bool {
    matches!(
        character,
        ':' | 'A'..='Z'
            | '_'
            | 'a'..='z'
            | '\u{c0}'..='\u{d6}'
            | '\u{d8}'..='\u{f6}'
            | '\u{f8}'..='\u{2ff}'
            | '\u{370}'..='\u{37d}'
            | '\u{37f}'..='\u{1fff}'
            | '\u{200c}'..='\u{200d}'
            | '\u{2070}'..='\u{218f}'
            | '\u{2c00}'..='\u{2fef}'
            | '\u{3001}'..='\u{d7ff}'
            | '\u{f900}'..='\u{fdcf}'
            | '\u{fdf0}'..='\u{fffd}'
            | '\u{10000}'..='\u{effff}'
    )
}

const fn is_xml_name_character(character: char) -> bool {
    is_xml_name_start_character(character)
        || matches!(
            character,
            '-' | '.' | '0'..='9' | '\u{b7}' | '\u{300}'..='\u{36f}' | '\u{203f}'..='\u{2040}'
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accept_xml_names() {
        for name in ["div", "my-element", "svg:rect", "_x", "h1", "x.y", "éclair", "名前"] {
            assert_eq!(NameGrammar::Xml.find_invalid_character(name), None, "{name}");
        }
    }

    #[test]
    fn reject_xml_names() {
        assert_eq!(NameGrammar::Xml.find_invalid_character("1a"), Some((0, '1')));
        assert_eq!(NameGrammar::Xml.find_invalid_character("-a"), Some((0, '-')));
        assert_eq!(NameGrammar::Xml.find_invalid_character("a b"), Some((1, ' ')));
        assert_eq!(NameGrammar::Xml.find_invalid_character("a<"), Some((1, '<')));
    }

    #[test]
    fn accept_html_names() {
        for name in ["div", "my-element", "a1", "x:y", "a<b"] {
            assert_eq!(NameGrammar::Html.find_invalid_character(name), None, "{name}");
        }
    }

    #[test]
    fn reject_html_names() {
        assert_eq!(NameGrammar::Html.find_invalid_character("_a"), Some((0, '_')));
        assert_eq!(NameGrammar::Html.find_invalid_character("é"), Some((0, 'é')));
        assert_eq!(NameGrammar::Html.find_invalid_character("a/b"), Some((1, '/')));
        assert_eq!(NameGrammar::Html.find_invalid_character("a>"), Some((1, '>')));
        assert_eq!(NameGrammar::Html.find_invalid_character("a\tb"), Some((1, '\t')));
    }

    #[test]
    fn accept_printable_names() {
        for name in ["1", "-", "<>", "é", "a/b"] {
            assert_eq!(
                NameGrammar::Printable.find_invalid_character(name),
                None,
                "{name}"
            );
        }
    }

    #[test]
    fn reject_printable_names() {
        assert_eq!(
            NameGrammar::Printable.find_invalid_character("a b"),
            Some((1, ' '))
        );
        assert_eq!(
            NameGrammar::Printable.find_invalid_character("\u{7}"),
            Some((0, '\u{7}'))
        );
    }

    #[test]
    fn count_positions_in_characters() {
        assert_eq!(NameGrammar::Xml.find_invalid_character("éé "), Some((2, ' ')));
    }

    #[test]
    fn default_to_xml() {
        assert_eq!(NameGrammar::default(), NameGrammar::Xml);
    }
}
