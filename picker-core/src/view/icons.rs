//! src/view/icons.rs
//! ============================================================================
//! # Entry Icons (Nerd Fonts)

pub const FOLDER_ICON: &str = "";
pub const FILE_ICON: &str = "";
pub const UP_ICON: &str = "";

/// Frames of the up button's rotate-in/rotate-out accent.
pub const ROTATE_FRAMES: [&str; 4] = ["◜", "◝", "◞", "◟"];
