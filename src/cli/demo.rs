//! `demo` subcommand: one capture over the built-in fixture scene.

use anyhow::Result;
use std::path::PathBuf;

use crate::config::CaptureBuilder;
use crate::snapshot::{DirectorySink, SnapshotCoordinator};

use super::demo_scene;

pub fn exec(
    out: PathBuf,
    max_depth: Option<u32>,
    max_elements: Option<usize>,
    stdout: bool,
) -> Result<()> {
    let mut builder = CaptureBuilder::new().output_dir(out.display().to_string());
    if let Some(d) = max_depth {
        builder = builder.max_depth(d);
    }
    if let Some(n) = max_elements {
        builder = builder.max_elements(n);
    }
    let cfg = builder.build();

    let world = demo_scene::build();
    let coordinator = SnapshotCoordinator::new(cfg.clone())
        .with_hierarchy(&world)
        .with_hit_test(&world);

    // Pointer position is irrelevant for the fixture world; any point hits
    // the demo button.
    let pointer = Some((100.0, 100.0));

    if stdout {
        let doc = coordinator.capture(pointer);
        print!("{}", doc.as_str());
        return Ok(());
    }

    let mut sink = DirectorySink::from_config(&cfg);
    coordinator.capture_and_deliver(pointer, &mut sink)?;
    println!("capture written into {}", sink.dir().display());
    Ok(())
}
