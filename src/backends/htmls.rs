use chrono::NaiveDate;
use log::warn;
use serde::Serialize;
use tera::{Context, Tera};

use crate::config::Config;
use crate::errors::{ConversionError, ParserError};
use crate::parser::locate;
use crate::publist::PublicationList;
use crate::record::entry::{EntryType, Record};

static PUBLIST_TEMPLATE: &str = include_str!("../../templates/publist.html.tera");
static REFERENCES_TEMPLATE: &str = include_str!("../../templates/references.html.tera");

/// Renders one cleaned record as an `<li>`, laid out according to its type and whichever optional
/// fields it has:
///
/// `[key] <title>, <authors>, <venue>, Vol., No., p. (or note), month <year>. [ pdf | link ]`
pub fn render_record(record: &Record, config: &Config) -> String {
    let fields = &record.fields;
    let mut html = String::from("\n<li>\n");
    html.push_str(&format!("[{}] ", record.key));

    // book chapters lead with the chapter; the book title comes after the authors
    let chapter = fields.chapter.is_some();
    if let Some(title) = fields.chapter.as_ref().or(fields.title.as_ref()) {
        html.push_str(&format!("<span class=\"title\">{title}</span>, "));
    }
    if let Some(author) = &fields.author {
        html.push_str(&format!("<span class=\"author\">{author}</span>, "));
    }
    if chapter {
        html.push_str("in: ");
        let book = [
            fields.title.as_ref().map(|title| format!("<i>{title}</i>")),
            fields.publisher.clone(),
        ];
        html.push_str(&book.into_iter().flatten().collect::<Vec<String>>().join(", "));
    }

    let venue = venue(record);
    if let Some(venue) = &venue {
        html.push_str(venue);
    }
    if let Some(volume) = &fields.volume {
        html.push_str(&format!(", Vol. {volume}"));
    }
    if let Some(number) = &fields.number {
        // a report number already shows up in the venue
        if record.entry_type != EntryType::TechReport {
            html.push_str(&format!(", No. {number}"));
        }
    }
    if let Some(pages) = &fields.pages {
        html.push_str(&format!(", p.{pages}"));
    } else if let Some(note) = &fields.note {
        if venue.is_some() || chapter {
            html.push_str(", ");
        }
        html.push_str(note);
    }
    if let Some(month) = &fields.month {
        html.push_str(&format!(", {month}"));
    }

    html.push_str("<span class=\"year\">");
    if let Some(year) = &fields.year {
        html.push_str(&format!(" {year}"));
    }
    html.push_str("</span>.");

    html.push_str(&links(record, config));
    html.push_str("</li>\n");
    html
}

/// Where the work appeared: journal, proceedings, or the kind of report/thesis it is
fn venue(record: &Record) -> Option<String> {
    let fields = &record.fields;
    if let Some(journal) = &fields.journal {
        return Some(format!("<i>{journal}</i>"));
    }
    if let Some(booktitle) = &fields.booktitle {
        return Some(booktitle.clone());
    }
    let (label, detail) = match record.entry_type {
        EntryType::PhdThesis => ("PhD thesis", &fields.school),
        EntryType::TechReport => ("Tech. Report", &fields.number),
        _ => return None,
    };
    match detail {
        Some(detail) => Some(format!("{label}, {detail}")),
        None => Some(label.to_string()),
    }
}

/// The bracketed `[ pdf | link ]` block, or nothing when there is nothing to link
fn links(record: &Record, config: &Config) -> String {
    let fields = &record.fields;
    let link = match (&fields.url, &fields.doi) {
        (Some(url), _) => Some(url.clone()),
        (None, Some(doi)) => Some(format!("http://dx.doi.org/{doi}")),
        (None, None) => None,
    };
    if fields.pdf.is_none() && link.is_none() {
        return String::new();
    }

    let mut html = String::from(" \n[&nbsp;");
    if let Some(pdf) = &fields.pdf {
        html.push_str(&format!("<a href=\"{}{pdf}\">pdf</a>&nbsp;", config.pdf_path));
        if link.is_some() {
            html.push_str("\n|&nbsp;");
        }
    }
    if let Some(link) = link {
        html.push_str(&format!("<a href=\"{link}\">link</a>&nbsp;"));
    }
    html.push_str("]\n");
    html
}

/// Stand-in list item for a citation key the bibliography doesn't have
pub fn missing_reference(key: &str) -> String {
    format!("\n<li>[{key}]</li>\n")
}

/// Looks up, cleans and renders a single entry. A missing key doesn't fail: it's logged and
/// rendered as a visibly broken item naming the key, so one bad citation can't sink a whole page.
pub fn render_by_key(source: &str, key: &str, config: &Config) -> Result<String, ParserError> {
    match locate(source, key) {
        Ok(record) => Ok(render_record(&record.cleaned(), config)),
        Err(ParserError::KeyNotFound(key)) => {
            warn!("Unable to find {key} in bibliography");
            Ok(missing_reference(&key))
        }
        Err(e) => Err(e),
    }
}

#[derive(Serialize)]
struct ReferencesContext {
    items: Vec<String>,
}

/// A "References" section listing the given keys, in the order given; empty when there are no
/// keys
pub fn render_references<S: AsRef<str>>(
    source: &str,
    keys: &[S],
    config: &Config,
) -> Result<String, ConversionError> {
    if keys.is_empty() {
        return Ok(String::new());
    }
    let items = keys
        .iter()
        .map(|key| render_by_key(source, key.as_ref(), config))
        .collect::<Result<Vec<String>, ParserError>>()?;
    render_from_templates(
        "references.html.tera",
        &Context::from_serialize(ReferencesContext { items })?,
    )
}

#[derive(Serialize)]
struct SectionContext {
    heading: &'static str,
    items: Vec<String>,
}

#[derive(Serialize)]
struct PublistContext<'a> {
    config: &'a Config,
    charset: &'static str,
    created: String,
    sections: Vec<SectionContext>,
}

/// Renders the whole publication list page, one reverse-numbered list per section
pub fn render_publist(
    list: &PublicationList,
    config: &Config,
    created: NaiveDate,
) -> Result<String, ConversionError> {
    let sections = list
        .buckets
        .iter()
        .map(|bucket| SectionContext {
            heading: bucket.heading,
            items: bucket
                .records
                .iter()
                .map(|record| render_record(record, config))
                .collect(),
        })
        .collect();
    let context = PublistContext {
        config,
        charset: config.encoding.charset(),
        created: created.format("%Y-%m-%d").to_string(),
        sections,
    };
    render_from_templates("publist.html.tera", &Context::from_serialize(context)?)
}

fn render_from_templates(template: &str, context: &Context) -> Result<String, ConversionError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("publist.html.tera", PUBLIST_TEMPLATE),
        ("references.html.tera", REFERENCES_TEMPLATE),
    ])?;
    Ok(tera.render(template, context)?)
}
