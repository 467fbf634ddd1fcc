#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The kinds of line a bibtex source can contain, as far as this (restricted) grammar cares
pub enum LineType {
    /// `@type{key,` starting in the first column
    Declaration,
    /// `name = value ...`, with whitespace on both sides of the `=`
    Field,
    /// A lone `}` in the first column, closing an entry
    Terminator,
    /// Anything else with content; extends the field currently being read
    Continuation,
    /// Nothing but whitespace
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Produced by the Scanner; the raw text of one line, what kind of line it is, and where it came
/// from
pub struct BibLine<'a> {
    pub line_type: LineType,
    pub text: &'a str,
    pub line: usize,
}

impl<'a> BibLine<'a> {
    pub fn new(text: &'a str, line: usize) -> Self {
        BibLine {
            line_type: LineType::classify(text),
            text,
            line,
        }
    }

    /// Convenience function to return the [`LineType`] for matching
    pub fn line_type(&self) -> LineType {
        self.line_type
    }

    /// For declarations, the text between the `@` and the first `{`
    pub fn entry_type(&self) -> Option<&'a str> {
        if self.line_type != LineType::Declaration {
            return None;
        }
        let (tag, _) = self.text[1..].split_once('{')?;
        Some(tag.trim())
    }

    /// For declarations, the citation key between the first `{` and the following `,`
    pub fn key(&self) -> Option<&'a str> {
        if self.line_type != LineType::Declaration {
            return None;
        }
        let (_, rest) = self.text.split_once('{')?;
        let key = match rest.split_once(',') {
            Some((key, _)) => key,
            None => rest,
        };
        Some(key.trim())
    }

    /// True when this line declares the entry with the given key, i.e., it reads `@...{key,`
    /// followed by nothing but whitespace
    pub fn declares_key(&self, key: &str) -> bool {
        self.line_type == LineType::Declaration
            && self
                .text
                .trim_end()
                .strip_suffix(',')
                .and_then(|head| head.strip_suffix(key))
                .is_some_and(|head| head.ends_with('{'))
    }

    /// For field lines, the lower-cased field name and the value tokens joined by single spaces
    pub fn field(&self) -> Option<(String, String)> {
        if self.line_type != LineType::Field {
            return None;
        }
        let mut words = self.text.split_whitespace();
        let name = words.next()?.to_lowercase();
        words.next()?; // the "="
        Some((name, words.collect::<Vec<&str>>().join(" ")))
    }

    /// The line's words joined by single spaces, as appended to a field that continues onto it
    pub fn continuation(&self) -> String {
        self.text.split_whitespace().collect::<Vec<&str>>().join(" ")
    }
}

impl LineType {
    pub fn classify(text: &str) -> Self {
        if text.starts_with('@') {
            return LineType::Declaration;
        }
        if text.trim_end() == "}" {
            return LineType::Terminator;
        }
        let mut words = text.split_whitespace();
        match (words.next(), words.next()) {
            (None, _) => LineType::Blank,
            (Some(_), Some("=")) => LineType::Field,
            _ => LineType::Continuation,
        }
    }
}
