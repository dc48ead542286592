//! ``src/model/nav_state.rs``
//! ============================================================================
//! # `NavState`: where the picker is and what the user has highlighted
//!
//! Owned exclusively by the controller. The current directory changes only
//! when a listing is applied; the two visibility flags change only through
//! the transition methods below, which report real edges so the view can
//! animate them.

use std::path::{Path, PathBuf};

use compact_str::CompactString;

use crate::fs::entry::{Entry, display_name};

/// Title shown while the current directory is the root.
pub const TOP_LEVEL_TITLE: &str = "Parent Directory";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    #[inline]
    #[must_use]
    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }
}

/// A real Hidden↔Shown edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Enter,
    Exit,
}

/// Moves `flag` to `target`, reporting the edge if there was one.
fn transition(flag: &mut Visibility, target: Visibility) -> Option<Transition> {
    if *flag == target {
        return None;
    }
    *flag = target;
    Some(match target {
        Visibility::Shown => Transition::Enter,
        Visibility::Hidden => Transition::Exit,
    })
}

#[derive(Debug, Clone)]
pub struct NavState {
    /// Fixed at start.
    root: PathBuf,

    current_dir: PathBuf,

    /// Target of "go up", recomputed on every listing.
    parent_dir: Option<PathBuf>,

    /// Replaced wholesale on every listing.
    entries: Vec<Entry>,

    /// What Open/Select act on. After a listing this is the listed
    /// directory itself, with no row highlighted.
    highlighted: Entry,
    highlighted_index: Option<usize>,

    action_panel: Visibility,
    up_button: Visibility,

    title: CompactString,
}

impl NavState {
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            parent_dir: root.parent().map(Path::to_path_buf),
            highlighted: Entry::directory(&root),
            current_dir: root.clone(),
            root,
            entries: Vec::new(),
            highlighted_index: None,
            action_panel: Visibility::Hidden,
            up_button: Visibility::Hidden,
            title: CompactString::const_new(TOP_LEVEL_TITLE),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    #[must_use]
    pub fn parent_dir(&self) -> Option<&Path> {
        self.parent_dir.as_deref()
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub const fn highlighted(&self) -> &Entry {
        &self.highlighted
    }

    #[must_use]
    pub const fn highlighted_index(&self) -> Option<usize> {
        self.highlighted_index
    }

    #[must_use]
    pub const fn action_panel(&self) -> Visibility {
        self.action_panel
    }

    #[must_use]
    pub const fn up_button(&self) -> Visibility {
        self.up_button
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn is_at_root(&self) -> bool {
        self.current_dir == self.root
    }

    /// Up is usable only while its affordance is visible and a parent exists.
    #[must_use]
    pub fn go_up_target(&self) -> Option<&Path> {
        if self.up_button.is_shown() {
            self.parent_dir()
        } else {
            None
        }
    }

    /// Highlight entry `index`. Directories bring up the action panel;
    /// anything else leaves it as it was. Out-of-range indices are ignored.
    pub fn highlight(&mut self, index: usize) -> Option<Transition> {
        let entry = self.entries.get(index)?.clone();
        let is_dir = entry.is_dir;

        self.highlighted = entry;
        self.highlighted_index = Some(index);

        if is_dir {
            self.show_action_panel()
        } else {
            None
        }
    }

    /// Index one step away from the current highlight, clamped to the list.
    #[must_use]
    pub fn step_index(&self, delta: isize) -> Option<usize> {
        let last = self.entries.len().checked_sub(1)?;
        let next = match self.highlighted_index {
            Some(i) => i.saturating_add_signed(delta).min(last),
            None if delta < 0 => last,
            None => 0,
        };
        Some(next)
    }

    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.entries.len().checked_sub(1)
    }

    pub fn show_action_panel(&mut self) -> Option<Transition> {
        transition(&mut self.action_panel, Visibility::Shown)
    }

    pub fn hide_action_panel(&mut self) -> Option<Transition> {
        transition(&mut self.action_panel, Visibility::Hidden)
    }

    /// Install a completed listing of `dir`. Returns the up-button edge, if
    /// any.
    pub fn apply_listing(&mut self, dir: PathBuf, entries: Vec<Entry>) -> Option<Transition> {
        self.parent_dir = dir.parent().map(Path::to_path_buf);
        self.highlighted = Entry::directory(&dir);
        self.highlighted_index = None;
        self.entries = entries;
        self.current_dir = dir;

        if self.is_at_root() {
            self.title = CompactString::const_new(TOP_LEVEL_TITLE);
            transition(&mut self.up_button, Visibility::Hidden)
        } else {
            self.title = display_name(&self.current_dir);
            transition(&mut self.up_button, Visibility::Shown)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entries(dir: &str) -> Vec<Entry> {
        vec![
            Entry::new(format!("{dir}/Download"), true),
            Entry::new(format!("{dir}/notes.txt"), false),
            Entry::new(format!("{dir}/Music"), true),
        ]
    }

    #[test]
    fn test_initial_state_highlights_root() {
        let nav = NavState::new(PathBuf::from("/storage/emulated/0"));

        assert_eq!(nav.highlighted().path(), Path::new("/storage/emulated/0"));
        assert!(nav.highlighted().is_dir);
        assert_eq!(nav.parent_dir(), Some(Path::new("/storage/emulated")));
        assert_eq!(nav.up_button(), Visibility::Hidden);
        assert_eq!(nav.action_panel(), Visibility::Hidden);
    }

    #[test]
    fn test_root_listing_hides_up_and_uses_fixed_title() {
        let root = PathBuf::from("/storage/emulated/0");
        let mut nav = NavState::new(root.clone());

        assert_eq!(nav.apply_listing(root, sample_entries("/storage/emulated/0")), None);

        assert!(nav.is_at_root());
        assert_eq!(nav.title(), TOP_LEVEL_TITLE);
        assert_eq!(nav.up_button(), Visibility::Hidden);
        assert_eq!(nav.go_up_target(), None);
    }

    #[test]
    fn test_child_listing_shows_up_and_names_title() {
        let mut nav = NavState::new(PathBuf::from("/storage/emulated/0"));
        let child = PathBuf::from("/storage/emulated/0/Download");

        let edge = nav.apply_listing(child, Vec::new());

        assert_eq!(edge, Some(Transition::Enter));
        assert_eq!(nav.title(), "Download");
        assert_eq!(nav.go_up_target(), Some(Path::new("/storage/emulated/0")));

        // Back at the root the button leaves again.
        let edge = nav.apply_listing(PathBuf::from("/storage/emulated/0"), Vec::new());
        assert_eq!(edge, Some(Transition::Exit));
        assert_eq!(nav.up_button(), Visibility::Hidden);
    }

    #[test]
    fn test_highlight_directory_shows_panel_once() {
        let root = PathBuf::from("/r");
        let mut nav = NavState::new(root.clone());
        nav.apply_listing(root, sample_entries("/r"));

        assert_eq!(nav.highlight(0), Some(Transition::Enter));
        assert_eq!(nav.highlight(2), None);
        assert_eq!(nav.action_panel(), Visibility::Shown);
        assert_eq!(nav.highlighted().name, "Music");
    }

    #[test]
    fn test_highlight_file_leaves_panel_unchanged() {
        let root = PathBuf::from("/r");
        let mut nav = NavState::new(root.clone());
        nav.apply_listing(root, sample_entries("/r"));

        assert_eq!(nav.highlight(1), None);
        assert_eq!(nav.action_panel(), Visibility::Hidden);

        nav.highlight(0);
        assert_eq!(nav.highlight(1), None);
        assert_eq!(nav.action_panel(), Visibility::Shown);
        assert_eq!(nav.highlighted_index(), Some(1));
    }

    #[test]
    fn test_out_of_range_highlight_is_ignored() {
        let mut nav = NavState::new(PathBuf::from("/r"));
        assert_eq!(nav.highlight(5), None);
        assert_eq!(nav.highlighted_index(), None);
    }

    #[test]
    fn test_panel_transitions_are_idempotent() {
        let mut nav = NavState::new(PathBuf::from("/r"));

        assert_eq!(nav.hide_action_panel(), None);
        assert_eq!(nav.show_action_panel(), Some(Transition::Enter));
        assert_eq!(nav.show_action_panel(), None);
        assert_eq!(nav.hide_action_panel(), Some(Transition::Exit));
        assert_eq!(nav.hide_action_panel(), None);
    }

    #[test]
    fn test_listing_resets_highlight_to_directory() {
        let root = PathBuf::from("/r");
        let mut nav = NavState::new(root.clone());
        nav.apply_listing(root, sample_entries("/r"));
        nav.highlight(1);

        nav.apply_listing(PathBuf::from("/r/Download"), Vec::new());

        assert_eq!(nav.highlighted_index(), None);
        assert_eq!(nav.highlighted().path(), Path::new("/r/Download"));
        assert!(nav.entries().is_empty());
    }

    #[test]
    fn test_step_index_clamps() {
        let root = PathBuf::from("/r");
        let mut nav = NavState::new(root.clone());
        assert_eq!(nav.step_index(1), None);

        nav.apply_listing(root, sample_entries("/r"));
        assert_eq!(nav.step_index(1), Some(0));
        assert_eq!(nav.step_index(-1), Some(2));

        nav.highlight(2);
        assert_eq!(nav.step_index(1), Some(2));
        nav.highlight(0);
        assert_eq!(nav.step_index(-1), Some(0));
    }
}
