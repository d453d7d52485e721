//! Slug decoration for navigation labels

/// Markup used to turn a raw slug into its display form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    /// Opening tag wrapped around every slug word
    pub word_open: String,

    /// Closing tag wrapped around every slug word
    pub word_close: String,

    /// Text placed between two decorated words
    pub joiner: String,

    /// Words that are title-cased when they appear as a whole slug part
    pub title_case_words: Vec<String>,

    /// Opening markup of a command's navigation title
    pub label_open: String,

    /// Separator between the command id and the display slug in a navigation title
    pub label_separator: String,

    /// Closing markup of a command's navigation title
    pub label_close: String,
}

impl Default for Decoration {
    fn default() -> Self {
        Self {
            word_open: "<strong>".to_string(),
            word_close: "</strong>".to_string(),
            joiner: "&nbsp;and&nbsp;".to_string(),
            title_case_words: vec!["introduction".to_string()],
            label_open: "<code>".to_string(),
            label_separator: ":&nbsp;".to_string(),
            label_close: "</code>".to_string(),
        }
    }
}

impl Decoration {
    /// Build the display form of a raw, hyphen-delimited slug
    ///
    /// `foo-introduction-bar` becomes
    /// `<strong>foo</strong>&nbsp;and&nbsp;<strong>Introduction</strong>&nbsp;and&nbsp;<strong>bar</strong>`.
    pub fn display_slug(&self, raw: &str) -> String {
        raw.split('-')
            .map(|part| {
                let word = if self.title_case_words.iter().any(|w| w == part) {
                    title_case(part)
                } else {
                    part.to_string()
                };
                format!("{}{}{}", self.word_open, word, self.word_close)
            })
            .collect::<Vec<_>>()
            .join(&self.joiner)
    }

    /// Navigation title of a command entry, e.g. `<code>001:&nbsp;<strong>setup</strong></code>`
    pub fn nav_title(&self, command_id: &str, display_slug: &str) -> String {
        format!(
            "{}{}{}{}{}",
            self.label_open, command_id, self.label_separator, display_slug, self.label_close
        )
    }
}

/// Upper-case the first letter of a word, leaving the rest untouched
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
