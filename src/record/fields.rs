use std::collections::BTreeMap;

use serde::Serialize;

/// Declares the [`Fields`] struct: one `Option<String>` per known bibtex field, plus a catch-all
/// map for everything else, and the name-based accessors the parser and cleaner need.
macro_rules! bib_fields {
    ($($field:ident),* $(,)?) => {
        #[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
        /// The fields of a bibtex entry. The renderer only looks at the named ones; anything
        /// else the source declares is kept in `extra` (cleaned like the rest, but never shown).
        pub struct Fields {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<String>,
            )*
            #[serde(flatten)]
            pub extra: BTreeMap<String, String>,
        }

        impl Fields {
            pub fn get(&self, name: &str) -> Option<&str> {
                match name {
                    $(stringify!($field) => self.$field.as_deref(),)*
                    _ => self.extra.get(name).map(String::as_str),
                }
            }

            /// Sets a field by its (lower-case) name, returning the value it replaced
            pub fn insert(&mut self, name: &str, value: String) -> Option<String> {
                match name {
                    $(stringify!($field) => self.$field.replace(value),)*
                    _ => self.extra.insert(name.to_string(), value),
                }
            }

            /// All present fields, known ones first
            pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
                let mut present: Vec<(&str, &str)> = vec![];
                $(
                    if let Some(value) = &self.$field {
                        present.push((stringify!($field), value.as_str()));
                    }
                )*
                present.extend(self.extra.iter().map(|(k, v)| (k.as_str(), v.as_str())));
                present.into_iter()
            }

            pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut String)> {
                let mut present: Vec<(&str, &mut String)> = vec![];
                $(
                    if let Some(value) = self.$field.as_mut() {
                        present.push((stringify!($field), value));
                    }
                )*
                present.extend(self.extra.iter_mut().map(|(k, v)| (k.as_str(), v)));
                present.into_iter()
            }
        }
    };
}

bib_fields!(
    author, title, chapter, journal, booktitle, publisher, school, volume, number, pages, note,
    month, year, url, doi, pdf,
);

impl Fields {
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
