//! Embedded license templates for `license_text`.

const MIT_TEMPLATE: &str = "

Copyright {year} {author}

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the \u{201c}Software\u{201d}), to deal in the Software without restriction, including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \u{201c}AS IS\u{201d}, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
";

/// Whether a template exists for `license_name` (exact, case-sensitive)
pub fn has_embedded_template(license_name: &str) -> bool {
    template_for(license_name).is_some()
}

fn template_for(license_name: &str) -> Option<&'static str> {
    match license_name {
        "MIT" => Some(MIT_TEMPLATE),
        _ => None,
    }
}

/// Fill the template for `license_name`, or `None` if none is embedded
pub fn standard_license_text(license_name: &str, author: &str, year: i32) -> Option<String> {
    template_for(license_name).map(|template| {
        template
            .replace("{year}", &year.to_string())
            .replace("{author}", author)
    })
}

/// Shown when a license has no embedded template
pub fn missing_template_message(license_name: &str) -> String {
    format!(
        "License text for {} not embedded in this file, please add it manually",
        license_name
    )
}
