//! Shared constants: DOM hooks, labels, colors, and timer delays.

// --- Theme ---

/// Class on `<body>` selecting the dark palette.
pub const DARK_MODE_CLASS: &str = "dark-mode";
/// Class of the injected theme toggle button.
pub const THEME_TOGGLE_CLASS: &str = "theme-toggle";
/// Toggle label while the light theme is active.
pub const LABEL_SWITCH_TO_DARK: &str = "🌙 Dark Mode";
/// Toggle label while the dark theme is active.
pub const LABEL_SWITCH_TO_LIGHT: &str = "☀️ Light Mode";

// --- Layout hooks ---

pub const STYLE_ELEMENT_ID: &str = "folio-style";
pub const CONFIG_ELEMENT_ID: &str = "folio-config";
pub const FOOTER_CLASS: &str = "footer-dynamic";
pub const LAST_UPDATED_ID: &str = "last-updated";
pub const NAV_LINK_SELECTOR: &str = "nav ul li a";
pub const NAV_ACTIVE_CLASS: &str = "nav-link-active";
pub const PAGE_DATA_KEY: &str = "page";

// --- Page widgets ---

pub const INTERACTIVE_CARD_CLASS: &str = "interactive-card";
pub const PROFILE_IMAGE_SELECTOR: &str = ".profile-pic img";
pub const ABOUT_TEXT_SELECTOR: &str = ".about-text";
pub const FUN_FACT_DISPLAY_ID: &str = "fun-fact-display";
pub const FUN_FACT_BUTTON_LABEL: &str = "Reveal a Fun Fact!";
pub const EDU_ITEM_SELECTOR: &str = ".edu-item";
pub const EDU_DETAIL_CLASS: &str = "edu-item-detail";
pub const EDU_OPEN_CLASS: &str = "open";
pub const SKILL_ITEM_SELECTOR: &str = ".skill-item";
pub const PROJECT_ITEM_SELECTOR: &str = ".project-list li";
pub const PROJECT_ITEM_CLASS: &str = "project-item";
pub const PROJECT_NOTE_TEXT: &str = " (Interaction noted!)";
pub const CONTACT_LINK_SELECTOR: &str = ".contact-info a";
pub const CONTACT_HOVER_CLASS: &str = "contact-link-hover";
pub const MAILTO_LINK_SELECTOR: &str = "a[href^=\"mailto:\"]";
pub const MAILTO_PREFIX: &str = "mailto:";
pub const COPY_LABEL: &str = "📋 Copy Email";
pub const COPIED_LABEL: &str = "✅ Copied!";

// --- Colors ---

pub const ACCENT_CYAN: &str = "#00bcd4";
pub const ACCENT_CYAN_DARK: &str = "#0097a7";
pub const ACCENT_MINT: &str = "#64ffda";
pub const ACCENT_PURPLE: &str = "#bb86fc";
pub const ACCENT_PURPLE_DARK: &str = "#9c66e2";
pub const INK_DARK: &str = "#222";
pub const INK_DARKEST: &str = "#121212";
pub const SKILL_HIGHLIGHT: &str = "rgba(0, 188, 212, 0.2)";

// --- Timers ---

/// How long the project "interaction noted" tag stays visible.
pub const PROJECT_NOTE_MS: u32 = 1_000;
/// How long the copy button shows its success state.
pub const COPY_FEEDBACK_MS: u32 = 1_500;
