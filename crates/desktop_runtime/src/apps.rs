//! Built-in application catalog: titles, icons, and default open requests.

use system_ui::IconName;

use crate::grid;
use crate::model::{
    AppId, IconId, IconRecord, OpenWindowRequest, WindowFlags, WindowRect, MENU_BAR_HEIGHT,
};

impl AppId {
    /// Default window title.
    pub fn title(self) -> &'static str {
        match self {
            Self::PromptStudio => "Prompt Studio",
            Self::ReadMe => "Read Me",
            Self::About => "About PromptDesk",
        }
    }
}

/// Returns the launcher glyph for an application.
pub fn app_icon_name(app_id: AppId) -> IconName {
    match app_id {
        AppId::PromptStudio => IconName::Sparkle,
        AppId::ReadMe => IconName::DocumentText,
        AppId::About => IconName::Info,
    }
}

/// Builds the default open request for an application.
///
/// The About box sizes itself to content (intrinsic dimensions) and carries
/// no resize/maximize chrome.
pub fn default_open_request(app_id: AppId) -> OpenWindowRequest {
    let mut request = OpenWindowRequest::new(app_id);
    match app_id {
        AppId::PromptStudio => {
            request.rect = Some(WindowRect {
                x: 96,
                y: MENU_BAR_HEIGHT + 44,
                w: 520,
                h: 460,
            });
        }
        AppId::ReadMe => {
            request.rect = Some(WindowRect {
                x: 160,
                y: MENU_BAR_HEIGHT + 72,
                w: 420,
                h: 360,
            });
        }
        AppId::About => {
            request.rect = Some(WindowRect {
                x: 220,
                y: MENU_BAR_HEIGHT + 96,
                w: 0,
                h: 0,
            });
            request.flags = WindowFlags {
                resizable: false,
                draggable: true,
                minimizable: false,
                maximizable: false,
            };
        }
    }
    request
}

/// Builds the initial desktop icon set.
///
/// Definitions carry rough positions; each is snapped to the lattice exactly
/// once here so stored icon positions are grid-aligned from the start.
pub fn default_desktop_icons() -> Vec<IconRecord> {
    let definitions = [
        (AppId::PromptStudio, "Prompt Studio", (20, 44)),
        (AppId::ReadMe, "Read Me", (20, 150)),
        (AppId::About, "About", (20, 250)),
    ];

    definitions
        .iter()
        .enumerate()
        .map(|(index, (app_id, label, (x, y)))| IconRecord {
            id: IconId(index as u32 + 1),
            app_id: *app_id,
            label: (*label).to_string(),
            position: grid::snap_to_grid(*x as f64, *y as f64),
            selected: false,
        })
        .collect()
}
