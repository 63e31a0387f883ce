use tracing::{debug, error};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlAnchorElement, ScrollBehavior, ScrollIntoViewOptions};

use portfolio::Theme;
use portfolio::content::ResumeAsset;
use portfolio::effects::{Downloader, Scroller, ThemeRoot};

// web-sys hands back JsValue for exceptions, which is not an std error
fn js_error(context: &str, err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{context}: {err:?}"))
}

fn document() -> anyhow::Result<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| anyhow::Error::msg("no global document exists"))
}

// smooth-scrolls to the element whose id matches the section anchor
pub struct DomScroller;

impl Scroller for DomScroller {
    fn scroll_into_view(&mut self, anchor: &str) -> bool {
        let element = match document() {
            Ok(doc) => doc.get_element_by_id(anchor),
            Err(err) => {
                error!("cannot scroll to {anchor}: {err}");
                return false;
            }
        };

        let Some(element) = element else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

// toggles the palette class on <html>
pub struct DocumentRoot;

impl DocumentRoot {
    fn set_class(theme: Theme) -> anyhow::Result<()> {
        let root = document()?
            .document_element()
            .ok_or_else(|| anyhow::Error::msg("document has no root element"))?;

        root.class_list()
            .toggle_with_force(Theme::LIGHT_CLASS, theme == Theme::Light)
            .map_err(|err| js_error("failed to toggle theme class", err))?;

        Ok(())
    }
}

impl ThemeRoot for DocumentRoot {
    fn apply(&mut self, theme: Theme) {
        if let Err(err) = Self::set_class(theme) {
            error!("failed to apply theme {theme:?}: {err}");
        }
    }
}

// AnchorDownloader
//
// clicks a detached <a download> pointing at the asset.  if the file is
// missing, the browser reports the failure itself
pub struct AnchorDownloader;

impl AnchorDownloader {
    fn click(asset: &ResumeAsset) -> anyhow::Result<()> {
        let doc = document()?;
        let body = doc
            .body()
            .ok_or_else(|| anyhow::Error::msg("document has no body"))?;

        let anchor: HtmlAnchorElement = doc
            .create_element("a")
            .map_err(|err| js_error("failed to create anchor", err))?
            .dyn_into()
            .map_err(|_| anyhow::Error::msg("created element is not an anchor"))?;

        anchor.set_href(&asset.path);
        anchor.set_download(&asset.file_name);

        // firefox ignores clicks on anchors that are not in the document
        body.append_child(&anchor)
            .map_err(|err| js_error("failed to attach anchor", err))?;
        anchor.click();
        anchor.remove();

        debug!("requested download of {}", asset.path);
        Ok(())
    }
}

impl Downloader for AnchorDownloader {
    fn download(&mut self, asset: &ResumeAsset) {
        if let Err(err) = Self::click(asset) {
            error!("failed to start resume download: {err}");
        }
    }
}
