use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "breathe")]
#[command(about = "A guided breathing visualizer for the terminal")]
#[command(long_about = "breathe - A guided breathing visualizer for the terminal

Pick a technique from the menu and follow the phases as they change.
Playback loops until you press Ctrl+C.

TECHNIQUES:
  1. Box Breathing                 Inhale 4s, Hold 4s, Exhale 4s, Hold 4s
  2. Diaphragmatic Breathing       Inhale 5s, Exhale 5s
  3. Alternate Nostril Breathing   Left/right nostril cycle, 4s per phase

Any other selection, or no selection at all, starts Box Breathing.

CONFIGURATION:
  ~/.breathe/config.yaml (optional)

    display:
      color: auto          # auto, always or never
      mode: overwrite      # overwrite or lines
      progress_bar: false

Set RUST_LOG=debug to trace phase changes on stderr.")]
#[command(version)]
pub struct Cli {}
