mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use simple_logger::SimpleLogger;
use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use bib2html::{
    backends::{
        Backends,
        htmls::{render_publist, render_references},
        json::render_json,
    },
    publist::PublicationList,
};

use cli::{Cli, read_input, read_output};

fn main() {
    let args = Cli::parse();
    let level = match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Warn,
    };
    SimpleLogger::new()
        .with_level(level)
        .with_colors(true)
        .without_timestamps()
        .init()
        .unwrap();

    if let Err(e) = run(args) {
        eprintln!("Error converting bibliography: {}", e);
        std::process::exit(1)
    }
}

fn run(args: Cli) -> Result<()> {
    let config = args.config()?;
    let source = read_input(&args)?;

    if let Some(keys) = args.cited_keys()? {
        let references = render_references(&source, keys.as_slice(), &config)?;
        return render_bytes(config.encoding.encode(&references), read_output(&args));
    }

    let list = PublicationList::from_source(&source)?;
    info!("Read {} publications from {}", list.len(), args.file);
    match args.backend {
        Backends::Html => {
            let today = chrono::Local::now().date_naive();
            let html = render_publist(&list, &config, today)?;
            render_bytes(config.encoding.encode(&html), read_output(&args))
        }
        Backends::Json => render_bytes(render_json(&list)?.into_bytes(), read_output(&args)),
    }
}

fn render_bytes(result: Vec<u8>, output_destination: Option<PathBuf>) -> Result<()> {
    match output_destination {
        Some(out_file) => {
            fs::write(&out_file, result)
                .with_context(|| format!("Error writing file {:?}", out_file))?;
            info!("Wrote {:?}", out_file);
        }
        None => io::stdout().write_all(&result)?,
    }
    Ok(())
}
