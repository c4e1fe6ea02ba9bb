//! Function keyword encoders
//!
//! Function keywords are the verbs of a console command. Each encoder
//! composes object fragments, connective literals (`at`, `thru`, `+`, `-`)
//! and an option suffix into one complete command string.

mod assignment;
mod call;
mod edit;
mod helping;
mod info;
mod labeling;
mod macros;
mod park;
mod playback;
mod selection;
mod store;
mod values;
mod variables;

pub use assignment::{
    assign, assign_fade, assign_function, assign_to_layout, empty, AssignTarget,
};
pub use call::call;
pub use edit::{
    copy, copy_cue, delete, delete_cue, delete_fixture, delete_group, delete_messages,
    delete_preset, edit, edit_object, move_object, remove, remove_effect, remove_fixture,
    remove_object, remove_preset_type, remove_selection,
};
pub use helping::{
    add_to_selection, at_relative, condition_and, if_condition, page_next, page_previous,
    remove_from_selection,
};
pub use info::{
    info, info_cue, info_group, info_preset, list_attribute, list_cue, list_group,
    list_messages, list_objects, list_preset, list_thru,
};
pub use labeling::{appearance, label, label_group, label_preset, Appearance};
pub use macros::{macro_input_after, macro_input_before};
pub use park::{park, unpark};
pub use playback::{
    def_go_back, def_go_forward, def_go_pause, go, go_back, go_back_executor, go_executor,
    go_fast_back, go_fast_forward, go_macro, go_sequence, goto, goto_cue, pause_sequence,
    temp_fader, FastTarget,
};
pub use selection::{
    clear, clear_active, clear_all, clear_selection, select_all_fixtures, select_fixture,
    select_fixture_from, select_fixture_to,
};
pub use store::{store, store_cue, store_cue_ranges, store_group, store_preset};
pub use values::{
    at, at_full, at_value, at_zero, attribute_at, channel_at, channel_at_channel,
    executor_at, fixture_at, fixture_at_fixture, group_at, preset_type_at, AtArgs,
};
pub use variables::{
    add_user_var, add_var, set_user_var, set_user_var_dialog, set_var, set_var_dialog,
};
