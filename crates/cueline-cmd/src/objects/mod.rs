//! Object keyword encoders
//!
//! Object keywords are the nouns of a console command: they identify what a
//! function applies to. Every encoder here returns the object fragment
//! (`"fixture 1 thru 10"`, `"preset 2.5"`) that function encoders compose
//! into complete commands.

mod attributes;
mod cues;
mod dmx;
mod executors;
mod fixtures;
mod groups;
mod layouts;
mod presets;
mod time;

pub use attributes::{attribute, feature};
pub use cues::{cue, cue_part, cue_with, sequence, sequence_in_pool};
pub use dmx::{dmx, dmx_all, dmx_in_universe, dmx_universe};
pub use executors::{executor, executor_on_page};
pub use fixtures::{channel, channel_all, channel_sub, fixture, fixture_all, fixture_sub};
pub use groups::group;
pub use layouts::layout;
pub use presets::{preset, preset_named, preset_type, preset_typed, preset_typed_named};
pub use time::{
    timecode, timecode_all, timecode_in_slot, timecode_slot, timer, timer_all,
};

use crate::error::Result;
use crate::ident::Selection;

/// Render `"{keyword} {selection}"`, the base shape of every object fragment
pub(crate) fn keyword_selection(keyword: &str, sel: Selection) -> Result<String> {
    Ok(format!("{} {}", keyword, sel.render()?))
}
