use anyhow::{Context, Result, bail};
use bib2html::{
    backends::Backends,
    citations::citation_keys,
    config::{Config, OutputEncoding},
};
use clap::Parser;
use std::{collections::BTreeSet, fs, io, path::PathBuf};

/// Main entrypoint for bib2html when called as executable
#[derive(Parser)]
#[command(name = "bib2html", version, about)]
pub struct Cli {
    /// Bibtex file for processing. To read from standard input (stdin), use "-".
    pub file: String,

    /// Provide a filename for the output.
    /// To send to standard out (stdout), use "-".
    #[arg(short = 'o', long = "out-file")]
    pub output: Option<String>,

    /// Select a backend for conversion.
    #[arg(value_enum, short = 'b', long = "backend", default_value = "html")]
    pub backend: Backends,

    /// JSON configuration file; the flags below override its values
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Page title of the publication list
    #[arg(long = "title")]
    pub title: Option<String>,

    /// Stylesheet to link from the publication list
    #[arg(long = "css")]
    pub css_file: Option<String>,

    /// Location prepended to `pdf` fields when linking to papers
    #[arg(long = "pdf-path")]
    pub pdf_path: Option<String>,

    /// Character encoding of the output
    #[arg(value_enum, long = "encoding")]
    pub encoding: Option<OutputEncoding>,

    /// Author surname to mark as selected (may be repeated)
    #[arg(long = "selected-author")]
    pub selected_authors: Vec<String>,

    /// Link to the bibtex file, shown above the publication list
    #[arg(long = "bib-link")]
    pub bib_link: Option<String>,

    /// Render a references list for these citation keys instead of the whole publication list
    /// (may be repeated). The list is HTML and goes to stdout unless -o is given.
    #[arg(short = 'k', long = "cite")]
    pub cite: Vec<String>,

    /// Render a references list for every `[{key}]` cited in this file
    #[arg(long = "cite-from")]
    pub cite_from: Option<PathBuf>,

    /// Log what's going on
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Defaults, then the config file, then command-line overrides
    pub fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        if let Some(css_file) = &self.css_file {
            config.css_file = css_file.clone();
        }
        if let Some(pdf_path) = &self.pdf_path {
            config.pdf_path = pdf_path.clone();
        }
        if let Some(encoding) = self.encoding {
            config.encoding = encoding;
        }
        if !self.selected_authors.is_empty() {
            config.selected_authors = self.selected_authors.clone();
        }
        if self.bib_link.is_some() {
            config.bib_link = self.bib_link.clone();
        }
        Ok(config)
    }

    /// Whether a references list was asked for instead of the publication list
    pub fn wants_references(&self) -> bool {
        !self.cite.is_empty() || self.cite_from.is_some()
    }

    /// Keys to render as references (sorted, each once), if a references list was asked for at
    /// all
    pub fn cited_keys(&self) -> Result<Option<Vec<String>>> {
        if !self.wants_references() {
            return Ok(None);
        }
        if self.backend == Backends::Json {
            bail!("References lists are only rendered as HTML; drop --backend json");
        }
        let mut keys: BTreeSet<String> = self.cite.iter().cloned().collect();
        if let Some(path) = &self.cite_from {
            let page = fs::read_to_string(path)
                .with_context(|| format!("Unable to read file {:?}", path))?;
            keys.extend(citation_keys(&page));
        }
        Ok(Some(keys.into_iter().collect()))
    }
}

pub fn read_input(args: &Cli) -> Result<String> {
    match args.file.as_str() {
        "-" => io::read_to_string(io::stdin()).context("Error reading from stdin"),
        _ => fs::read_to_string(args.file.as_str())
            .with_context(|| format!("Unable to read file {:?}", &args.file)),
    }
}

pub fn read_output(args: &Cli) -> Option<PathBuf> {
    match args.output {
        Some(ref output) => {
            if output == "-" {
                None
            } else {
                Some(PathBuf::from(output))
            }
        }
        None => {
            if args.file == "-" || args.wants_references() {
                // stdin in, stdout out; references are a fragment for another page
                None
            } else {
                let mut out_destination = PathBuf::from(&args.file);
                out_destination.set_extension(args.backend.extension());
                Some(out_destination)
            }
        }
    }
}
