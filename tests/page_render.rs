//! Integration tests for whole pages built from a site configuration

use std::io::Write;

use fleet_view::page::write_page;
use fleet_view::template::{PageLink, RequestContext};
use fleet_view::{render_page, ResponseBuffer, SiteConfig, ViewError};

const SITE: &str = r#"
[site]
title = "Acme Fleet"
copyright = "Copyright (C) Acme"

[decorations]
style = "<style>td { padding:0; }</style>"
header = """
    <div class='banner'>
      ${pageTitle} for ${account=guest}
    </div>
"""
right = "<a href='${helpUrl=/help}'>Help</a>"
"#;

#[test]
fn test_site_page() {
    let config = SiteConfig::from_str(SITE).expect("Should parse");
    let ctx = RequestContext::new()
        .with("pageTitle", "Trips")
        .with("account", "acme");
    let html = render_page(&config, &ctx, "<table id='trips'></table>").unwrap();

    insta::assert_snapshot!(html.trim_end(), @r"
    <!DOCTYPE html>
    <html>
    <head>
    <meta http-equiv='content-type' content='text/html; charset=UTF-8'>
    <title>Trips</title>
    <style>td { padding:0; }</style>
    </head>
    <body>
    <div class='banner'>
    Trips for acme
    </div>

    <table class='contentTable' width='100%'>
    <tr>
    <td valign='top'></td>
    <td valign='top' width='100%'><table id='trips'></table></td>
    <td valign='top'><a href='/help'>Help</a></td>
    </tr>
    </table>
    <center><hr><span style='font-size:7pt;'>Copyright (C) Acme</span></center>
    </body>
    </html>
    ");
}

#[test]
fn test_page_into_response_buffer() {
    let config = SiteConfig::from_str(SITE).expect("Should parse");
    let decor = config.build_decorations();
    let ctx = RequestContext::new().with("pageTitle", "Trips");

    let mut response = ResponseBuffer::new();
    write_page(&decor, &ctx, "", &mut response.output_stream().unwrap()).unwrap();
    let mut stream = response.output_stream().unwrap();
    stream.write_all(b"<!-- end -->").unwrap();

    let html = response.to_string_lossy();
    assert!(html.contains("Trips for guest"));
    assert!(html.ends_with("</html>\n<!-- end -->"));
    assert!(response.writer().is_err());
}

#[test]
fn test_page_through_response_writer() {
    let config = SiteConfig::from_str(SITE).expect("Should parse");
    let decor = config.build_decorations();
    let ctx = RequestContext::new().with("pageTitle", "Trips");

    let mut response = ResponseBuffer::new();
    write_page(&decor, &ctx, "<p>ok</p>", &mut response.writer().unwrap()).unwrap();

    let html = response.to_string_lossy();
    assert!(html.starts_with("<!DOCTYPE html>\n"));
    assert!(html.contains("<title>Trips</title>"));
    assert!(html.contains("<td valign='top' width='100%'><p>ok</p></td>"));
    assert!(response.output_stream().is_err());
}

#[test]
fn test_encoded_link() {
    let ctx = RequestContext::new().with("device", "truck 7/a");
    let link = PageLink::new("/track?d=${device}");
    assert_eq!(link.encode_url(&ctx), "/track?d=truck+7%2Fa");
    assert_eq!(link.target(), "_blank");
}

#[test]
fn test_bad_config_reports_location() {
    let source = "[site]\ntitle = 42\n";
    let err = SiteConfig::from_str(source).unwrap_err();
    let report = err.format(source, "site.toml");
    assert!(report.contains("site.toml"));

    let err: ViewError = err.into();
    assert!(matches!(err, ViewError::Config(_)));
}
