//! Integration tests for decoration chains

use std::borrow::Cow;
use std::sync::Arc;

use fleet_view::decor::{
    DecorError, DefaultDecorations, PageDecorations, PageFragments, Region, Resolution,
    MAX_CHAIN_DEPTH,
};
use fleet_view::template::RequestContext;
use fleet_view::SiteLabel;
use pretty_assertions::assert_eq;

/// A root that answers every region with a fixed marker
#[derive(Debug)]
struct MarkerRoot;

impl PageDecorations for MarkerRoot {
    fn set_default_decorations(&mut self, _fallback: Arc<dyn PageDecorations>) {}
    fn set_fragment(&mut self, _region: Region, _text: Option<&str>) {}
    fn set_jsp_uri(&mut self, _uri: Option<&str>) {}

    fn jsp_uri(&self) -> Option<&str> {
        None
    }

    fn resolve(&self, region: Region) -> Resolution<'_> {
        Resolution::Content(Cow::Owned(format!("[root {region} ${{title}}]")))
    }
}

fn write(decor: &dyn PageDecorations, region: Region, ctx: &RequestContext) -> String {
    let mut out = Vec::new();
    decor.write_region(region, &mut out, ctx).expect("Should write");
    String::from_utf8(out).unwrap()
}

#[test]
fn test_unset_header_delegates_to_fallback_unchanged() {
    let site = PageFragments::with_default(Arc::new(MarkerRoot));
    let ctx = RequestContext::new().with("title", "Fleet");
    assert_eq!(write(&site, Region::Header, &ctx), "[root header ${title}]");
}

#[test]
fn test_header_substitutes_only_placeholders() {
    let mut site = PageFragments::with_default(Arc::new(MarkerRoot));
    site.set_page_header(Some("<h1 class='x'>${title} &amp; co</h1>"));
    let ctx = RequestContext::new().with("title", "Fleet");
    assert_eq!(
        write(&site, Region::Header, &ctx),
        "<h1 class='x'>Fleet &amp; co</h1>"
    );
}

#[test]
fn test_style_is_verbatim_with_trailing_newline() {
    let mut site = PageFragments::with_default(Arc::new(MarkerRoot));
    site.set_page_style(Some(" a \r\n b \n"));
    assert_eq!(site.page_style(), Some("a\nb"));

    site.set_page_style(Some("<style>${title}</style>"));
    let ctx = RequestContext::new().with("title", "Fleet");
    assert_eq!(write(&site, Region::Style, &ctx), "<style>${title}</style>\n");
}

#[test]
fn test_empty_fragment_does_not_fall_back() {
    let mut site = PageFragments::with_default(Arc::new(MarkerRoot));
    site.set_page_footer(Some("   "));
    assert_eq!(site.page_footer(), Some(""));
    assert_eq!(write(&site, Region::Footer, &RequestContext::new()), "");

    site.set_page_footer(None);
    assert_eq!(
        write(&site, Region::Footer, &RequestContext::new()),
        "[root footer ${title}]"
    );
}

#[test]
fn test_three_level_chain() {
    let root = DefaultDecorations::shared(SiteLabel::new("Fleet", "(c) Fleet"));

    let mut company = PageFragments::with_default(root);
    company.set_page_navigation(Some("<nav>${user}</nav>"));

    let mut site = PageFragments::with_default(Arc::new(company));
    site.set_page_header(Some("<h1>Site</h1>"));

    let ctx = RequestContext::new().with("user", "ops");
    assert_eq!(write(&site, Region::Header, &ctx), "<h1>Site</h1>");
    assert_eq!(write(&site, Region::Navigation, &ctx), "<nav>ops</nav>");
    assert_eq!(
        write(&site, Region::Footer, &ctx),
        "<center><hr><span style='font-size:7pt;'>(c) Fleet</span></center>"
    );
    assert_eq!(write(&site, Region::Left, &ctx), "");
}

#[test]
fn test_chain_without_root_is_configuration_error() {
    let mut site = PageFragments::new();
    site.set_page_header(Some("<h1/>"));

    let mut out = Vec::new();
    let err = site
        .write_right(&mut out, &RequestContext::new())
        .unwrap_err();
    assert!(matches!(err, DecorError::MissingFallback { region: Region::Right }));
    assert!(err.is_configuration());
    assert!(out.is_empty());
}

#[test]
fn test_overlong_chain_is_rejected() {
    let mut decor: Arc<dyn PageDecorations> = Arc::new(PageFragments::new());
    for _ in 0..=MAX_CHAIN_DEPTH {
        decor = Arc::new(PageFragments::with_default(decor));
    }

    let mut out = Vec::new();
    let err = decor
        .write_header(&mut out, &RequestContext::new())
        .unwrap_err();
    assert!(matches!(err, DecorError::ChainTooDeep { .. }));
}

#[test]
fn test_jsp_uri() {
    let mut site = PageFragments::new();
    assert!(!site.has_jsp_uri());
    site.set_jsp_uri(Some("  "));
    assert_eq!(site.jsp_uri(), None);
    site.set_jsp_uri(Some("/jsp/loginSession.jsp"));
    assert!(site.has_jsp_uri());
}
