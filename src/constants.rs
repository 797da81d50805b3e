/// Markup contract shared with the page: marker attributes, element ids,
/// and class flag names. The surrounding HTML/CSS must use these exact
/// strings for discovery and styling to line up.
// Wrapper elements declare their animation kind here
pub const BEHAVIOR_ATTR: &str = "data-scroll-type";

// Descendants of a wrapper declare their role here
pub const CHILD_ROLE_ATTR: &str = "data-scroll-element";

// Menu controller elements and class flags
pub const HAMBURGER_ID: &str = "hamburger";
pub const MENU_OVERLAY_ID: &str = "menuOverlay";
pub const MENU_OPEN_CLASS: &str = "open";
pub const BODY_NO_SCROLL_CLASS: &str = "no-scroll";

// Class added by the one-way parallax/fadein reveals
pub const REVEAL_CLASS: &str = "visible";

// Optional HUD targets; writes are skipped when an id is missing
pub const PROGRESS_FILL_ID: &str = "progressFill";
pub const ELEMENT_COUNT_ID: &str = "elementCount";
pub const ACTIVE_ANIMATIONS_ID: &str = "activeAnimations";
pub const SCROLL_POSITION_ID: &str = "scrollPosition";
pub const FPS_ID: &str = "fps";
