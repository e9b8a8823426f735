//! HTML rendering for the single page
//!
//! One form, one submit action, an inline banner, and the
//! engine-recommended weights after a successful run. No client-side
//! framework; the page is a plain HTML form that posts back to
//! `/analyze`.

use crate::portfolio::{BenchmarkProfile, OptimizationStrategy};
use crate::server::types::{BannerKind, PageView};
use std::fmt::Write;

/// Escape text for safe interpolation into HTML
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_select<T: Copy>(
    name: &str,
    label: &str,
    options: &[T],
    selected: T,
    token: fn(&T) -> &'static str,
) -> String
where
    T: PartialEq,
{
    let mut html = String::new();
    let _ = write!(
        html,
        "<label for=\"{name}\">{label}</label>\n<select id=\"{name}\" name=\"{name}\">\n"
    );
    for option in options {
        let value = token(option);
        let selected_attr = if *option == selected { " selected" } else { "" };
        let _ = writeln!(
            html,
            "  <option value=\"{}\"{}>{}</option>",
            escape(value),
            selected_attr,
            escape(value)
        );
    }
    html.push_str("</select>\n");
    html
}

fn render_banner(view: &PageView) -> String {
    match &view.banner {
        Some(banner) => {
            let class = match banner.kind {
                BannerKind::Success => "banner success",
                BannerKind::Error => "banner error",
            };
            format!("<p class=\"{}\">{}</p>\n", class, escape(&banner.text))
        }
        None => String::new(),
    }
}

fn render_recommendations(view: &PageView) -> String {
    let Some(recommended) = &view.recommended else {
        return String::new();
    };

    let mut html = String::from("<h2>Recommended Portfolio Weights</h2>\n<table>\n");
    html.push_str("<tr><th>Ticker</th><th>Weight</th></tr>\n");
    for (ticker, weight) in recommended {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{:.4}</td></tr>",
            escape(ticker),
            weight
        );
    }
    html.push_str("</table>\n");
    html
}

/// Render the full page for one evaluation
pub fn render(view: &PageView) -> String {
    let strategy_select = render_select(
        "optimization",
        "Optimization strategy",
        &OptimizationStrategy::ALL,
        view.strategy,
        OptimizationStrategy::as_str,
    );
    let benchmark_select = render_select(
        "benchmark",
        "Benchmark risk strategy",
        &BenchmarkProfile::ALL,
        view.benchmark,
        BenchmarkProfile::as_str,
    );

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Portfolio Analysis and Optimization</title>
<style>
  body {{ font-family: sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; }}
  label {{ display: block; margin-top: 1rem; font-weight: bold; }}
  input, select {{ width: 100%; padding: 0.4rem; margin-top: 0.25rem; }}
  button {{ margin-top: 1.5rem; padding: 0.6rem 1.2rem; }}
  .banner {{ padding: 0.6rem; border-radius: 4px; }}
  .banner.success {{ background: #e6f4ea; color: #1e4620; }}
  .banner.error {{ background: #fce8e6; color: #5f2120; }}
  table {{ border-collapse: collapse; margin-top: 1rem; }}
  td, th {{ border: 1px solid #ccc; padding: 0.4rem 0.8rem; text-align: left; }}
</style>
</head>
<body>
<h1>Portfolio Analysis and Optimization</h1>
{banner}
<form method="post" action="/analyze">
<label for="tickers">Ticker symbols (comma separated)</label>
<input id="tickers" name="tickers" type="text" value="{tickers}">
<label for="weights">Portfolio weights (comma separated)</label>
<input id="weights" name="weights" type="text" value="{weights}">
{strategy_select}
<label for="start_date">Start date</label>
<input id="start_date" name="start_date" type="date" value="{start_date}">
{benchmark_select}
<button type="submit">Analyze and Save Portfolio</button>
</form>
{recommendations}
<p>
This tool analyzes and optimizes an investment portfolio from the selected
tickers, weights, optimization strategy, and benchmark risk strategy.
The latest configuration is saved and prefills the form on the next visit.
</p>
</body>
</html>
"#,
        banner = render_banner(view),
        tickers = escape(&view.tickers),
        weights = escape(&view.weights),
        strategy_select = strategy_select,
        start_date = escape(&view.start_date),
        benchmark_select = benchmark_select,
        recommendations = render_recommendations(view),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::PortfolioConfig;
    use crate::server::types::Banner;

    #[test]
    fn test_default_page_prefills_documented_defaults() {
        let view = PageView::from_config(&PortfolioConfig::default());
        let html = render(&view);

        assert!(html.contains("value=\"SPTM,SPAB,SPDW\""));
        assert!(html.contains("value=\"0.46,0.37,0.14\""));
        assert!(html.contains("value=\"2018-01-01\""));
        assert!(html.contains("<option value=\"EF\" selected>"));
        assert!(html.contains("<option value=\"Moderate Growth\" selected>"));
    }

    #[test]
    fn test_banner_and_recommendations_render() {
        let view = PageView::from_config(&PortfolioConfig::default())
            .with_banner(Banner::success("Portfolio saved successfully!"))
            .with_recommendations(vec![("SPTM".to_string(), 0.5), ("SPAB".to_string(), 0.5)]);
        let html = render(&view);

        assert!(html.contains("banner success"));
        assert!(html.contains("Portfolio saved successfully!"));
        assert!(html.contains("Recommended Portfolio Weights"));
        assert!(html.contains("<td>SPTM</td><td>0.5000</td>"));
    }

    #[test]
    fn test_user_input_is_escaped() {
        let mut view = PageView::from_config(&PortfolioConfig::default());
        view.tickers = "<script>alert(1)</script>".to_string();
        let html = render(&view);

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
