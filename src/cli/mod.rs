//! CLI: demo capture plus maintenance over the capture artifact directory.

mod demo;
mod demo_scene;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use crate::snapshot::registry::{registry_find, registry_list, registry_prune};

#[derive(Parser, Debug)]
#[command(
    name = "scenesnap",
    version,
    about = "Scene snapshot engine: demo capture and artifact maintenance",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Run one capture over the built-in demo scene.
    Demo {
        #[arg(long, default_value = "scene-snapshots")]
        out: PathBuf,
        #[arg(long)]
        max_depth: Option<u32>,
        #[arg(long)]
        max_elements: Option<usize>,
        /// Print the document to stdout instead of writing an artifact.
        #[arg(long)]
        stdout: bool,
    },
    /// List registered captures (oldest first).
    List {
        #[arg(long)]
        dir: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Print one captured document by registry id.
    Show {
        #[arg(long)]
        dir: PathBuf,
        #[arg(long)]
        id: String,
    },
    /// Keep the newest N captures, delete the rest.
    Prune {
        #[arg(long)]
        dir: PathBuf,
        #[arg(long, default_value_t = 20)]
        keep: usize,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Demo {
            out,
            max_depth,
            max_elements,
            stdout,
        } => demo::exec(out, max_depth, max_elements, stdout),

        Cmd::List { dir, json } => exec_list(dir, json),

        Cmd::Show { dir, id } => exec_show(dir, id),

        Cmd::Prune { dir, keep } => exec_prune(dir, keep),
    }
}

fn exec_list(dir: PathBuf, json: bool) -> Result<()> {
    let entries = registry_list(&dir)?;
    if json {
        println!("{}", serde_json::to_string(&entries)?);
        return Ok(());
    }
    if entries.is_empty() {
        println!("no captures registered in {}", dir.display());
        return Ok(());
    }
    for e in entries {
        println!("{}  label={}  file={}", e.id, e.label, e.file);
    }
    Ok(())
}

fn exec_show(dir: PathBuf, id: String) -> Result<()> {
    let entry = registry_find(&dir, &id)?
        .ok_or_else(|| anyhow!("no capture with id '{}' in {}", id, dir.display()))?;
    let path = dir.join(&entry.file);
    let text = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    print!("{}", text);
    Ok(())
}

fn exec_prune(dir: PathBuf, keep: usize) -> Result<()> {
    let removed = registry_prune(&dir, keep)?;
    println!("pruned {} capture(s), kept at most {}", removed, keep);
    Ok(())
}
