// side effects requested by the controllers
//
// the controllers never touch the browser directly.  instead, they issue
// commands to these collaborators, which the webapp implements on top of
// web-sys and the tests implement as simple recorders

use crate::content::ResumeAsset;
use crate::state::Theme;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Notification {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn message_sent() -> Self {
        Self::new(
            "Message Sent!",
            "Thank you for your message. I'll get back to you soon.",
        )
    }

    pub fn resume_downloaded() -> Self {
        Self::new("Resume Downloaded", "Your download should begin shortly.")
    }
}

pub trait Scroller {
    // returns false if no element with this anchor exists; callers skip silently
    fn scroll_into_view(&mut self, anchor: &str) -> bool;
}

pub trait ThemeRoot {
    fn apply(&mut self, theme: Theme);
}

pub trait Downloader {
    fn download(&mut self, asset: &ResumeAsset);
}

/// Sink for transient "toast" messages.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    #[derive(Default)]
    pub struct Recorder {
        pub scrolls: Vec<String>,
        pub themes: Vec<Theme>,
        pub downloads: Vec<ResumeAsset>,
        pub notifications: Vec<Notification>,
        pub missing_anchors: Vec<String>,
    }

    impl Scroller for Recorder {
        fn scroll_into_view(&mut self, anchor: &str) -> bool {
            if self.missing_anchors.iter().any(|a| a == anchor) {
                return false;
            }
            self.scrolls.push(anchor.to_owned());
            true
        }
    }

    impl ThemeRoot for Recorder {
        fn apply(&mut self, theme: Theme) {
            self.themes.push(theme);
        }
    }

    impl Downloader for Recorder {
        fn download(&mut self, asset: &ResumeAsset) {
            self.downloads.push(asset.clone());
        }
    }

    impl Notifier for Recorder {
        fn notify(&mut self, notification: Notification) {
            self.notifications.push(notification);
        }
    }
}
