use tracing::{debug, info};

use crate::content::ResumeAsset;
use crate::effects::{Downloader, Notification, Notifier, Scroller, ThemeRoot};
use crate::section::Section;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    // class set on the document root; dark is the unclassed default palette
    pub const LIGHT_CLASS: &'static str = "light";

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

// UiState
//
// the only mutable state on the page.  it is owned by the root component and
// handed to children through a signal, and it is never persisted: a reload
// always starts from the default below
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    active_section: Section,
    menu_open: bool,
    theme: Theme,
}

impl Default for UiState {
    fn default() -> Self {
        UiState {
            active_section: Section::Home,
            menu_open: false,
            theme: Theme::Dark,
        }
    }
}

impl UiState {
    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark_mode(&self) -> bool {
        self.theme.is_dark()
    }

    // navigation controller

    /// Highlights `id`, closes the mobile menu and asks the scroller to bring
    /// the anchor into view. Ids outside the fixed navigation set are ignored.
    ///
    /// Returns the selected section, or `None` for an unknown id.
    pub fn select_section(&mut self, id: &str, scroller: &mut impl Scroller) -> Option<Section> {
        let Some(section) = Section::from_id(id) else {
            debug!("ignoring navigation to unknown section {id}");
            return None;
        };

        self.go_to(section, scroller);
        Some(section)
    }

    pub fn go_to(&mut self, section: Section, scroller: &mut impl Scroller) {
        self.active_section = section;
        self.menu_open = false;

        if !scroller.scroll_into_view(section.id()) {
            debug!("no anchor for section {section}, skipping scroll");
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    // theme controller

    pub fn toggle_theme(&mut self, root: &mut impl ThemeRoot) -> Theme {
        self.theme = self.theme.toggled();
        root.apply(self.theme);

        info!({theme = ?self.theme}, "theme changed");
        self.theme
    }
}

// contact form handler
//
// the form has no backend.  by the time this runs, the browser has already
// blocked any submission with an empty required field, so all that is left is
// to acknowledge the message.  field values are deliberately never read
pub fn submit_contact(notifier: &mut impl Notifier) {
    info!("contact form submitted");
    notifier.notify(Notification::message_sent());
}

// resume download handler
pub fn download_resume(
    asset: &ResumeAsset,
    downloader: &mut impl Downloader,
    notifier: &mut impl Notifier,
) {
    info!({path = %asset.path, file_name = %asset.file_name}, "downloading resume");
    downloader.download(asset);
    notifier.notify(Notification::resume_downloaded());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::testing::Recorder;

    fn resume() -> ResumeAsset {
        ResumeAsset {
            path: "/assets/resume.pdf".to_owned(),
            file_name: "resume.pdf".to_owned(),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = UiState::default();
        assert_eq!(state.active_section(), Section::Home);
        assert!(state.is_dark_mode());
        assert!(!state.is_menu_open());
    }

    #[test]
    fn test_select_every_section_closes_menu() {
        for section in Section::ALL {
            let mut state = UiState::default();
            let mut recorder = Recorder::default();
            state.toggle_menu();

            assert_eq!(state.select_section(section.id(), &mut recorder), Some(section));
            assert_eq!(state.active_section(), section);
            assert!(!state.is_menu_open());
            assert_eq!(recorder.scrolls, vec![section.id().to_owned()]);
        }
    }

    #[test]
    fn test_select_unknown_section_is_noop() {
        let mut state = UiState::default();
        let mut recorder = Recorder::default();
        state.toggle_menu();

        assert_eq!(state.select_section("blog", &mut recorder), None);
        assert_eq!(state.active_section(), Section::Home);
        assert!(state.is_menu_open());
        assert!(recorder.scrolls.is_empty());
    }

    #[test]
    fn test_missing_anchor_still_updates_state() {
        let mut state = UiState::default();
        let mut recorder = Recorder {
            missing_anchors: vec!["contact".to_owned()],
            ..Default::default()
        };

        state.select_section("contact", &mut recorder);
        assert_eq!(state.active_section(), Section::Contact);
        assert!(recorder.scrolls.is_empty());
    }

    #[test]
    fn test_second_selection_redirects_scroll() {
        let mut state = UiState::default();
        let mut recorder = Recorder::default();

        state.select_section("projects", &mut recorder);
        state.select_section("about", &mut recorder);
        assert_eq!(state.active_section(), Section::About);
        assert_eq!(recorder.scrolls, vec!["projects", "about"]);
    }

    #[test]
    fn test_toggle_menu_flips() {
        let mut state = UiState::default();
        state.toggle_menu();
        assert!(state.is_menu_open());
        state.toggle_menu();
        assert!(!state.is_menu_open());
    }

    #[test]
    fn test_toggle_theme_twice_is_identity() {
        let mut state = UiState::default();
        let mut recorder = Recorder::default();

        assert_eq!(state.toggle_theme(&mut recorder), Theme::Light);
        assert!(!state.is_dark_mode());
        assert_eq!(state.toggle_theme(&mut recorder), Theme::Dark);
        assert!(state.is_dark_mode());
        assert_eq!(recorder.themes, vec![Theme::Light, Theme::Dark]);
    }

    #[test]
    fn test_theme_does_not_touch_navigation() {
        let mut state = UiState::default();
        let mut recorder = Recorder::default();
        state.select_section("experience", &mut recorder);
        state.toggle_theme(&mut recorder);
        assert_eq!(state.active_section(), Section::Experience);
    }

    #[test]
    fn test_submit_contact_notifies_once() {
        let mut recorder = Recorder::default();
        submit_contact(&mut recorder);
        assert_eq!(recorder.notifications, vec![Notification::message_sent()]);
    }

    #[test]
    fn test_download_resume_notifies_every_time() {
        let mut downloads = Recorder::default();
        let mut notes = Recorder::default();
        let asset = resume();

        download_resume(&asset, &mut downloads, &mut notes);
        download_resume(&asset, &mut downloads, &mut notes);
        assert_eq!(notes.notifications.len(), 2);
        assert!(
            notes
                .notifications
                .iter()
                .all(|n| *n == Notification::resume_downloaded())
        );
    }

    #[test]
    fn test_download_resume_requests_asset() {
        let mut downloads = Recorder::default();
        let mut notes = Recorder::default();
        download_resume(&resume(), &mut downloads, &mut notes);
        assert_eq!(downloads.downloads, vec![resume()]);
        assert!(downloads.notifications.is_empty());
        assert_eq!(notes.notifications.len(), 1);
    }
}
