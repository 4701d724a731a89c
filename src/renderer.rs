//! HTML emission.
//!
//! Turns styled runs into an HTML fragment. Adjacent runs with identical
//! style merge into one element first (unless disabled), literal text is
//! escaped (unless disabled), and each styled run is wrapped in nested tags
//! opened as `<b>` `<u>` `<i>` `<span style="…">` and closed in reverse.
//! Plain runs are emitted bare.

use crate::style::AnsiColor;
use crate::tracker::Run;
use crate::Converter;

/// Render runs to an HTML fragment per the given configuration.
pub fn render(runs: Vec<Run>, config: &Converter) -> String {
    let runs = if config.optimize { merge(runs) } else { runs };

    let mut html = String::new();
    for run in &runs {
        emit(&mut html, run, config);
    }
    html
}

/// Coalesce consecutive runs with identical style. Output-size optimization
/// only; never observable in rendered styling.
fn merge(runs: Vec<Run>) -> Vec<Run> {
    let mut merged: Vec<Run> = Vec::with_capacity(runs.len());
    for run in runs {
        match merged.last_mut() {
            Some(prev) if prev.style == run.style => prev.text.push_str(&run.text),
            _ => merged.push(run),
        }
    }
    merged
}

fn emit(html: &mut String, run: &Run, config: &Converter) {
    let style = run.style;
    if style.is_plain() {
        if config.escape_html {
            push_escaped(html, &run.text);
        } else {
            html.push_str(&run.text);
        }
        return;
    }

    let has_color = style.fg.is_some() || style.bg.is_some();

    if style.bold {
        html.push_str("<b>");
    }
    if style.underline {
        html.push_str("<u>");
    }
    if style.italic {
        html.push_str("<i>");
    }
    if has_color {
        html.push_str("<span style=\"");
        if let Some(fg) = style.fg {
            push_color_decl(html, "color", fg, &config.var_prefix);
        }
        if let Some(bg) = style.bg {
            if style.fg.is_some() {
                html.push(';');
            }
            push_color_decl(html, "background-color", bg, &config.var_prefix);
        }
        html.push_str("\">");
    }

    if config.escape_html {
        push_escaped(html, &run.text);
    } else {
        html.push_str(&run.text);
    }

    if has_color {
        html.push_str("</span>");
    }
    if style.italic {
        html.push_str("</i>");
    }
    if style.underline {
        html.push_str("</u>");
    }
    if style.bold {
        html.push_str("</b>");
    }
}

/// Emit the literal template `{property}:var(--{prefix}{name},{hex})`.
/// Host pages can override `--{prefix}{name}` to re-theme the palette
/// without changing the markup.
fn push_color_decl(html: &mut String, property: &str, color: AnsiColor, prefix: &str) {
    html.push_str(property);
    html.push_str(":var(--");
    html.push_str(prefix);
    html.push_str(color.name());
    html.push(',');
    html.push_str(color.hex());
    html.push(')');
}

fn push_escaped(html: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => html.push_str("&amp;"),
            '<' => html.push_str("&lt;"),
            '>' => html.push_str("&gt;"),
            _ => html.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleState;

    fn run(text: &str, style: StyleState) -> Run {
        Run {
            text: text.into(),
            style,
        }
    }

    fn red() -> StyleState {
        StyleState {
            fg: Some(AnsiColor::Red),
            ..Default::default()
        }
    }

    #[test]
    fn test_plain_run_has_no_markup() {
        let html = render(vec![run("hi", StyleState::default())], &Converter::new());
        assert_eq!(html, "hi");
    }

    #[test]
    fn test_bold_only_is_bare_b_tag() {
        let style = StyleState {
            bold: true,
            ..Default::default()
        };
        let html = render(vec![run("x", style)], &Converter::new());
        assert_eq!(html, "<b>x</b>");
    }

    #[test]
    fn test_color_declaration_template() {
        let html = render(vec![run("x", red())], &Converter::new());
        assert_eq!(html, "<span style=\"color:var(--red,#a00)\">x</span>");
    }

    #[test]
    fn test_foreground_before_background() {
        let style = StyleState {
            fg: Some(AnsiColor::Red),
            bg: Some(AnsiColor::Blue),
            ..Default::default()
        };
        let html = render(vec![run("x", style)], &Converter::new());
        assert_eq!(
            html,
            "<span style=\"color:var(--red,#a00);background-color:var(--blue,#00a)\">x</span>"
        );
    }

    #[test]
    fn test_tag_nesting_order() {
        let style = StyleState {
            bold: true,
            italic: true,
            underline: true,
            fg: Some(AnsiColor::Green),
            bg: None,
        };
        let html = render(vec![run("x", style)], &Converter::new());
        assert_eq!(
            html,
            "<b><u><i><span style=\"color:var(--green,#0a0)\">x</span></i></u></b>"
        );
    }

    #[test]
    fn test_merge_coalesces_equal_styles() {
        let html = render(vec![run("a", red()), run("b", red())], &Converter::new());
        assert_eq!(html, "<span style=\"color:var(--red,#a00)\">ab</span>");
    }

    #[test]
    fn test_skip_optimize_keeps_separate_spans() {
        let config = Converter::new().skip_optimize(true);
        let html = render(vec![run("a", red()), run("b", red())], &config);
        assert_eq!(
            html,
            "<span style=\"color:var(--red,#a00)\">a</span>\
             <span style=\"color:var(--red,#a00)\">b</span>"
        );
    }

    #[test]
    fn test_escaping() {
        let html = render(vec![run("a<&>b", StyleState::default())], &Converter::new());
        assert_eq!(html, "a&lt;&amp;&gt;b");

        let config = Converter::new().skip_escape(true);
        let html = render(vec![run("a<&>b", StyleState::default())], &config);
        assert_eq!(html, "a<&>b");
    }

    #[test]
    fn test_var_prefix() {
        let config = Converter::new().four_bit_var_prefix(Some("theme-".into()));
        let html = render(vec![run("x", red())], &config);
        assert_eq!(html, "<span style=\"color:var(--theme-red,#a00)\">x</span>");
    }
}
