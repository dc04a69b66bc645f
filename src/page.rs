//! Whole-page shell around a rendered body

use std::io::Write;

use crate::combo::escape_html;
use crate::decor::{DecorError, PageDecorations, Region};
use crate::template::KeyValueMap;

/// Context key holding the document title
pub const PAGE_TITLE_KEY: &str = "pageTitle";

/// CSS class of the table holding the banners and the body
pub const CSS_CONTENT_TABLE: &str = "contentTable";

/// Write a complete HTML document
///
/// The style region goes into `<head>`. The body sits between the left and
/// right banners, below the header and navigation and above the footer.
/// The title comes from the `pageTitle` context key and is escaped; `body`
/// is written as-is.
pub fn write_page(
    decor: &dyn PageDecorations,
    ctx: &dyn KeyValueMap,
    body: &str,
    out: &mut dyn Write,
) -> Result<(), DecorError> {
    let title = ctx.key_value(PAGE_TITLE_KEY, None).unwrap_or_default();

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(
        out,
        "<meta http-equiv='content-type' content='text/html; charset=UTF-8'>"
    )?;
    writeln!(out, "<title>{}</title>", escape_html(&title))?;
    decor.write_style(out, ctx)?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;

    decor.write_header(out, ctx)?;
    writeln!(out)?;
    decor.write_navigation(out, ctx)?;
    writeln!(out)?;

    writeln!(out, "<table class='{CSS_CONTENT_TABLE}' width='100%'>")?;
    writeln!(out, "<tr>")?;
    write_cell(decor, Region::Left, "<td valign='top'>", ctx, out)?;
    writeln!(out, "<td valign='top' width='100%'>{body}</td>")?;
    write_cell(decor, Region::Right, "<td valign='top'>", ctx, out)?;
    writeln!(out, "</tr>")?;
    writeln!(out, "</table>")?;

    decor.write_footer(out, ctx)?;
    writeln!(out)?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(())
}

fn write_cell(
    decor: &dyn PageDecorations,
    region: Region,
    open: &str,
    ctx: &dyn KeyValueMap,
    out: &mut dyn Write,
) -> Result<(), DecorError> {
    write!(out, "{open}")?;
    decor.write_region(region, out, ctx)?;
    writeln!(out, "</td>")?;
    Ok(())
}

/// Render a complete HTML document to a string
pub fn render_page(
    decor: &dyn PageDecorations,
    ctx: &dyn KeyValueMap,
    body: &str,
) -> Result<String, DecorError> {
    let mut out = Vec::new();
    write_page(decor, ctx, body, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
