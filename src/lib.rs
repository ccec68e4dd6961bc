// Core logic for the bgm dataset-prep tools; the binaries under src/ are
// thin CLI shells around these modules.

pub mod label;
pub mod logscan;
pub mod sample;
pub mod split;
pub mod tidy;
