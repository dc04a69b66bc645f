//! HTML select control rendering

use std::io::{self, Write};

use super::{ComboMap, ComboOption};

/// CSS class of rendered select controls
pub const CSS_COMBO_BOX: &str = "adminComboBox";

/// Pixels per character of requested control width
const PIXELS_PER_CHAR: u32 = 8;

/// Escape text for use inside HTML content or a quoted attribute
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// A `<select>` element bound to a form field
#[derive(Debug, Clone)]
pub struct ComboBox<'a> {
    name: &'a str,
    id: Option<&'a str>,
    enabled: bool,
    width_chars: Option<u32>,
    onchange: Option<&'a str>,
}

impl<'a> ComboBox<'a> {
    /// A control submitting its value as `name`
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            id: None,
            enabled: true,
            width_chars: None,
            onchange: None,
        }
    }

    pub fn with_id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    /// Render the control disabled when `enabled` is false
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Width in characters; zero leaves the width to the browser
    pub fn with_width(mut self, chars: u32) -> Self {
        self.width_chars = (chars > 0).then_some(chars);
        self
    }

    /// Script run when the selection changes (enabled controls only)
    pub fn with_onchange(mut self, script: &'a str) -> Self {
        self.onchange = Some(script);
        self
    }

    /// Write the control with `selected` preselected
    pub fn write(
        &self,
        out: &mut dyn Write,
        map: &ComboMap,
        selected: Option<&ComboOption>,
    ) -> io::Result<()> {
        write!(out, "<select")?;
        if let Some(id) = self.id {
            write!(out, " id='{}'", escape_html(id))?;
        }
        write!(
            out,
            " class='{CSS_COMBO_BOX}' name='{}'",
            escape_html(self.name)
        )?;
        if let Some(chars) = self.width_chars {
            write!(out, " style='width:{}px;'", chars.saturating_mul(PIXELS_PER_CHAR))?;
        }
        if !self.enabled {
            write!(out, " disabled")?;
        } else if let Some(script) = self.onchange {
            write!(out, " onchange=\"{}\"", escape_html(script))?;
        }
        writeln!(out, ">")?;

        map.write_options(out, selected)?;
        writeln!(out, "</select>")
    }

    /// Render the control to a string
    pub fn render(&self, map: &ComboMap, selected: Option<&ComboOption>) -> String {
        let mut buf = Vec::new();
        self.write(&mut buf, map, selected)
            .expect("writing to a Vec cannot fail");
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl ComboMap {
    /// Write one `<option>` element per entry
    ///
    /// Without an explicit selection the default selection is used. An entry
    /// is selected when its key matches the selection's key or description,
    /// ignoring case. An empty map writes just the selection, if any.
    pub fn write_options(
        &self,
        out: &mut dyn Write,
        selected: Option<&ComboOption>,
    ) -> io::Result<()> {
        let selected = selected.or(self.default_selection());
        if self.is_empty() {
            tracing::warn!("option list is empty");
            if let Some(option) = selected {
                let key = option.key().unwrap_or("");
                let description = option.description().unwrap_or(key);
                write_option(out, key, description, true)?;
            }
            return Ok(());
        }
        for (key, description) in self {
            let is_selected = selected.is_some_and(|s| s.is_match(key));
            write_option(out, key, description, is_selected)?;
        }
        Ok(())
    }
}

fn write_option(
    out: &mut dyn Write,
    key: &str,
    description: &str,
    selected: bool,
) -> io::Result<()> {
    let marker = if selected { " selected" } else { "" };
    writeln!(
        out,
        "<option value='{}'{marker}>{}</option>",
        escape_html(key),
        escape_html(description)
    )
}
