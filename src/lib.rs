//! ANSI escape code to HTML conversion.
//!
//! Converts terminal output carrying SGR escape sequences (colors, bold,
//! italic, underline) into an HTML fragment that renders the same styling in
//! a browser. Colors are emitted as CSS custom properties with fixed
//! fallbacks, so host pages can re-theme the palette by defining
//! `--red`, `--bright-blue`, and so on.
//!
//! Pipeline, single pass: scan the input into literal/directive tokens, fold
//! SGR directives into a style state that stamps each literal run, then emit
//! one element per run, merging equal-style neighbors first.
//!
//! Anything that is not a well-formed SGR sequence (cursor movement, screen
//! clearing, truncated sequences) is passed through as literal text; unknown
//! SGR codes are ignored. Conversion never fails.
//!
//! ```
//! let html = ansi_html::convert("\x1b[1m\x1b[31mWorld\x1b[0m");
//! assert_eq!(html, "<b><span style=\"color:var(--red,#a00)\">World</span></b>");
//! ```

mod renderer;
mod scanner;
mod style;
mod tracker;

pub use style::AnsiColor;

/// Convert ANSI text to HTML with default settings: HTML escaping on,
/// span merging on, no custom-property prefix.
pub fn convert(text: &str) -> String {
    Converter::new().convert(text)
}

/// Conversion configuration, built up by chaining.
///
/// Each method consumes the value and returns a new one; clone a base
/// `Converter` to derive several configurations from the same template.
///
/// ```
/// use ansi_html::Converter;
///
/// let html = Converter::new()
///     .skip_escape(true)
///     .four_bit_var_prefix(Some("theme-".into()))
///     .convert("<b>\x1b[31mhi\x1b[0m</b>");
/// assert_eq!(html, "<b><span style=\"color:var(--theme-red,#a00)\">hi</span></b>");
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    pub(crate) escape_html: bool,
    pub(crate) optimize: bool,
    pub(crate) var_prefix: String,
}

impl Default for Converter {
    fn default() -> Self {
        Self {
            escape_html: true,
            optimize: true,
            var_prefix: String::new(),
        }
    }
}

impl Converter {
    /// Create a converter with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip escaping of `&`, `<` and `>` in literal text. Only safe when
    /// the input is trusted not to smuggle markup.
    pub fn skip_escape(mut self, skip: bool) -> Self {
        self.escape_html = !skip;
        self
    }

    /// Skip merging of adjacent equally-styled runs. The merge only shrinks
    /// the output; rendered styling is identical either way.
    pub fn skip_optimize(mut self, skip: bool) -> Self {
        self.optimize = !skip;
        self
    }

    /// Prefix for the palette's CSS custom properties. `Some("theme-")`
    /// emits `var(--theme-red,#a00)`; `None` restores the bare default.
    pub fn four_bit_var_prefix(mut self, prefix: Option<String>) -> Self {
        self.var_prefix = prefix.unwrap_or_default();
        self
    }

    /// Run the conversion pipeline with the accumulated settings.
    pub fn convert(&self, text: &str) -> String {
        let runs = tracker::runs(scanner::scan(text));
        renderer::render(runs, self)
    }
}
