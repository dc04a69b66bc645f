//! Built-in root decorations used when a site configures nothing

use std::borrow::Cow;
use std::sync::Arc;

use crate::config::SiteLabel;

use super::{PageDecorations, Region, Resolution};

/// CSS class for editable text fields
pub const CSS_TEXT_INPUT: &str = "textInput";
/// CSS class for read-only text fields
pub const CSS_TEXT_READONLY: &str = "textReadOnly";
/// CSS class for the content frame cell
pub const CSS_CONTENT_CELL: &str = "contentCell";
/// CSS class for the content message line
pub const CSS_CONTENT_MESSAGE: &str = "contentMessage";

/// Root of every decoration chain
///
/// Defines content for all regions: a stock stylesheet, the site title as a
/// centered banner, the copyright as footer, and empty navigation and
/// banners. Fragment setters and fallbacks are ignored.
#[derive(Debug, Clone)]
pub struct DefaultDecorations {
    label: SiteLabel,
    style: String,
    header: String,
    footer: String,
}

impl DefaultDecorations {
    pub fn new(label: SiteLabel) -> Self {
        let header = format!(
            "<center><span style='font-size:14pt;'><b>{}</b></span><hr></center>",
            label.title
        );
        let footer = format!(
            "<center><hr><span style='font-size:7pt;'>{}</span></center>",
            label.copyright
        );
        Self {
            style: default_style(),
            header,
            footer,
            label,
        }
    }

    /// Shared root ready to hang site fragments from
    pub fn shared(label: SiteLabel) -> Arc<dyn PageDecorations> {
        Arc::new(Self::new(label))
    }

    pub fn label(&self) -> &SiteLabel {
        &self.label
    }
}

impl Default for DefaultDecorations {
    fn default() -> Self {
        Self::new(SiteLabel::default())
    }
}

impl PageDecorations for DefaultDecorations {
    fn set_default_decorations(&mut self, _fallback: Arc<dyn PageDecorations>) {
        tracing::debug!("default decorations have no fallback, ignoring");
    }

    fn set_fragment(&mut self, region: Region, _text: Option<&str>) {
        tracing::debug!(%region, "default decorations are fixed, ignoring fragment");
    }

    fn set_jsp_uri(&mut self, _uri: Option<&str>) {}

    fn jsp_uri(&self) -> Option<&str> {
        None
    }

    fn resolve(&self, region: Region) -> Resolution<'_> {
        let content = match region {
            Region::Style => self.style.as_str(),
            Region::Header => self.header.as_str(),
            Region::Footer => self.footer.as_str(),
            Region::Navigation | Region::Left | Region::Right => "",
        };
        Resolution::Content(Cow::Borrowed(content))
    }
}

fn default_style() -> String {
    let rules = [
        "a:hover { color:#00CC00; }".to_string(),
        "h1 { font-family:Arial; font-size:16pt; white-space:pre; }".to_string(),
        "h2 { font-family:Arial; font-size:14pt; white-space:pre; }".to_string(),
        "h3 { font-family:Arial; font-size:12pt; white-space:pre; }".to_string(),
        "h4 { font-family:Arial; font-size:10pt; white-space:pre; }".to_string(),
        "form { margin-top:0px; margin-bottom:0px; }".to_string(),
        "body { font-size:8pt; font-family:verdana,sans-serif; }".to_string(),
        "td { font-size:8pt; font-family:verdana,sans-serif; }".to_string(),
        "input { font-size:8pt; font-family:verdana,sans-serif; }".to_string(),
        "input:focus { background-color: #FFFFC9; }".to_string(),
        "select { font-size:7pt; font-family:verdana,sans-serif; }".to_string(),
        "select:focus { background-color: #FFFFC9; }".to_string(),
        "textarea { font-size:8pt; font-family:verdana,sans-serif; }".to_string(),
        "textarea:focus { background-color: #FFFFC9; }".to_string(),
        format!(".{CSS_TEXT_INPUT} {{ border-width:2px; border-style:inset; border-color:#DDDDDD #EEEEEE #EEEEEE #DDDDDD; padding-left:2px; background-color:#FFFFFF; }}"),
        format!(".{CSS_TEXT_READONLY} {{ border-width:2px; border-style:inset; border-color:#DDDDDD #EEEEEE #EEEEEE #DDDDDD; padding-left:2px; background-color:#E7E7E7; }}"),
        format!(".{CSS_CONTENT_CELL} {{ padding:5px; width:300px; border-style:double; border-color:#555555; background-color:white; }}"),
        format!(".{CSS_CONTENT_MESSAGE} {{ padding-top:5px; font-style:oblique; text-align:center; }}"),
    ];

    let mut css = String::from("<style type='text/css'>\n");
    for rule in rules {
        css.push_str("  ");
        css.push_str(&rule);
        css.push('\n');
    }
    css.push_str("</style>\n");
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decor::PageFragments;
    use crate::template::RequestContext;
    use pretty_assertions::assert_eq;

    fn render(decor: &dyn PageDecorations, region: Region) -> String {
        let mut out = Vec::new();
        decor
            .write_region(region, &mut out, &RequestContext::new().with("t", "x"))
            .expect("should write");
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_every_region_has_content() {
        let root = DefaultDecorations::default();
        for region in Region::ALL {
            let mut out = Vec::new();
            assert!(root
                .write_region(region, &mut out, &RequestContext::new())
                .is_ok());
        }
    }

    #[test]
    fn test_header_and_footer_from_label() {
        let root = DefaultDecorations::new(SiteLabel::new("Acme Fleet", "Copyright Acme"));
        assert_eq!(
            render(&root, Region::Header),
            "<center><span style='font-size:14pt;'><b>Acme Fleet</b></span><hr></center>"
        );
        assert_eq!(
            render(&root, Region::Footer),
            "<center><hr><span style='font-size:7pt;'>Copyright Acme</span></center>"
        );
        assert_eq!(render(&root, Region::Navigation), "");
    }

    #[test]
    fn test_style_block() {
        let style = render(&DefaultDecorations::default(), Region::Style);
        assert!(style.starts_with("<style type='text/css'>\n"));
        assert!(style.ends_with("</style>\n"));
        assert!(style.contains(".textInput {"));
    }

    #[test]
    fn test_root_content_is_not_substituted() {
        let root = DefaultDecorations::new(SiteLabel::new("${t}", ""));
        assert!(render(&root, Region::Header).contains("<b>${t}</b>"));
    }

    #[test]
    fn test_setters_are_ignored() {
        let mut root = DefaultDecorations::default();
        let before = render(&root, Region::Header);
        root.set_page_header(Some("<h1>custom</h1>"));
        root.set_jsp_uri(Some("/x.jsp"));
        root.set_default_decorations(Arc::new(PageFragments::new()));
        assert_eq!(render(&root, Region::Header), before);
        assert!(!root.has_jsp_uri());
    }
}
