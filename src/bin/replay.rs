//! Replay a scripted editing session against an in-memory world.
//!
//! Usage: cargo run --bin replay -- --script <PATH> [OPTIONS]
//!
//! Options:
//!   --script <PATH>           JSON array of steps (required)
//!   --config <PATH>           Editor config JSON (default: built-in)
//!   --radius <N>              Loaded world half-size in blocks (default: 64)
//!   --load-clipboard <PATH>   Start with a saved clipboard
//!   --save-clipboard <PATH>   Write the final clipboard
//!
//! Script steps mirror what a host does: placing or destroying a block fires
//! the matching editor callback, and a hit fires both tool-hit callbacks.
//!
//! ```json
//! [
//!   { "step": "Place", "at": [0, 0, 0], "block": { "kind": "Mod", "custom_id": 3024 } },
//!   { "step": "Hit", "at": [0, 0, 5], "tool": "T_Stick" },
//!   { "step": "Expect", "at": [0, 0, 0], "block": { "kind": "Stone" } }
//! ]
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use serde::Deserialize;

use blockpaint::core::types::{BlockCoord, Result};
use blockpaint::edit::{Clipboard, EditConfig, EditState, HostEvent};
use blockpaint::math::BlockBox;
use blockpaint::voxel::{BlockInfo, BlockStore, MemoryWorld};

#[derive(Debug, Deserialize)]
#[serde(tag = "step")]
enum Step {
    /// Put a block in the world and report the placement
    Place { at: BlockCoord, block: BlockInfo },
    /// Remove a block and report the destruction
    Destroy { at: BlockCoord },
    /// Hit a block with a tool
    Hit { at: BlockCoord, tool: String },
    /// Fill a box without notifying the editor
    Fill { min: BlockCoord, max: BlockCoord, block: BlockInfo },
    /// Deliver a raw host event
    Host { event: HostEvent },
    /// Check a cell's contents
    Expect { at: BlockCoord, block: BlockInfo },
}

fn main() -> ExitCode {
    blockpaint::core::logging::init();

    let args: Vec<String> = std::env::args().collect();
    let Some(script) = parse_path_arg(&args, "--script") else {
        eprintln!("usage: replay --script <PATH> [--config <PATH>] [--radius <N>]");
        return ExitCode::FAILURE;
    };

    match run(&args, &script) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            eprintln!("{} expectation(s) failed", failed);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("replay failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Run the script, returning the number of failed expectations.
fn run(args: &[String], script: &Path) -> Result<usize> {
    let config = match parse_path_arg(args, "--config") {
        Some(path) => EditConfig::load_sync(&path)?,
        None => EditConfig::default(),
    };
    let radius = parse_i64_arg(args, "--radius").unwrap_or(64);

    let steps: Vec<Step> = serde_json::from_str(&std::fs::read_to_string(script)?)?;
    let mut world = MemoryWorld::new(BlockBox::from_corners(
        BlockCoord::splat(-radius),
        BlockCoord::splat(radius),
    ));
    let mut state = EditState::new(config)?;

    if let Some(path) = parse_path_arg(args, "--load-clipboard") {
        state.set_clipboard(Clipboard::load_sync(&path)?);
    }

    let mut failed = 0;
    for (index, step) in steps.iter().enumerate() {
        log::debug!("step {}: {:?}", index, step);
        match step {
            Step::Place { at, block } => {
                world.set_block(*at, *block);
                if let Some(id) = block.custom_id {
                    state.on_block_placed(*at, id);
                }
            }
            Step::Destroy { at } => {
                let block = world.get_and_set_block(*at, BlockInfo::AIR);
                if let Some(id) = block.custom_id {
                    state.on_block_destroyed(*at, id);
                }
            }
            Step::Hit { at, tool } => {
                let block = world.get_block(*at);
                if let Some(id) = block.custom_id {
                    state.on_tool_hit(&mut world, *at, id, tool);
                }
                state.on_any_block_tool_hit(&mut world, *at, block, tool);
            }
            Step::Fill { min, max, block } => {
                world.fill(BlockBox::from_corners(*min, *max), *block);
            }
            Step::Host { event } => state.handle_event(&mut world, event),
            Step::Expect { at, block } => {
                let actual = world.get_block(*at);
                if actual != *block {
                    log::error!("step {}: expected {:?} at {}, found {:?}", index, block, at, actual);
                    failed += 1;
                }
            }
        }
        for hint in world.take_hints() {
            println!("[{}] {}", hint.at, hint.text);
        }
    }

    if let Some(path) = parse_path_arg(args, "--save-clipboard") {
        state.clipboard().save_sync(&path)?;
    }

    log::info!(
        "replayed {} steps: {} undo / {} redo entries, {} blocks in clipboard",
        steps.len(),
        state.history().undo_len(),
        state.history().redo_len(),
        state.clipboard().len()
    );
    Ok(failed)
}

fn parse_path_arg(args: &[String], flag: &str) -> Option<PathBuf> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from)
}

fn parse_i64_arg(args: &[String], flag: &str) -> Option<i64> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}
