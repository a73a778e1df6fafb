use crate::format::{escape_html, group_thousands, rupiah, rupiah_millions, rupiah_thousands};
use crate::models::{DashboardModel, RankedItem, ShareSlice};
use crate::notify::{Notification, Variant};
use crate::period::Period;
use crate::sections::{Section, SECTIONS};
use std::f64::consts::{FRAC_PI_2, TAU};

const PALETTE: [&str; 5] = ["#ff6b4a", "#2f4858", "#f2a541", "#3c9d9b", "#8a5a83"];

/// Which dashboard page the sales data is painted on. Both share the same
/// numbers; they differ in copy and currency format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalesLayout {
    Overview,
    Detailed,
}

pub fn render_landing() -> String {
    page("Super Indo Analytics", LANDING_BODY)
}

pub fn render_auth(notices: &[Notification]) -> String {
    page(
        "Sign in · Super Indo Analytics",
        &AUTH_BODY.replace("{{NOTICES}}", &render_notices(notices)),
    )
}

pub fn render_sales(model: &DashboardModel, layout: SalesLayout, notices: &[Notification]) -> String {
    let (active, action) = match layout {
        SalesLayout::Overview => ("", "/dashboard"),
        SalesLayout::Detailed => ("sales", "/dashboard/sales"),
    };
    let content = SALES_CONTENT
        .replace("{{PERIOD_ACTION}}", action)
        .replace("{{PERIOD_OPTIONS}}", &period_options(model.period))
        .replace("{{KPIS}}", &kpi_cards(model, layout))
        .replace("{{BAR_TITLE}}", bar_title(layout))
        .replace("{{BAR_SUBTITLE}}", bar_subtitle(layout))
        .replace("{{BAR_CHART}}", &bar_chart(&model.top_ten))
        .replace("{{PIE_TITLE}}", pie_title(layout))
        .replace("{{PIE_CHART}}", &pie_chart(&model.top_five))
        .replace("{{UPDATED}}", &model.fetched_at.format("%Y-%m-%d %H:%M").to_string());
    shell(active, &content, notices)
}

pub fn render_section(section: &Section, notices: &[Notification]) -> String {
    let cards: String = section
        .cards
        .iter()
        .map(|card| {
            format!(
                r#"<div class="stat"><span class="label">{}</span><span class="value pending">Coming Soon</span><span class="caption">{}</span></div>"#,
                card.title, card.caption
            )
        })
        .collect();

    let content = SECTION_CONTENT
        .replace("{{HEADING}}", section.heading)
        .replace("{{SUBTITLE}}", section.subtitle)
        .replace("{{CARDS}}", &cards)
        .replace("{{PANEL_TITLE}}", section.panel_title)
        .replace("{{PANEL_DESCRIPTION}}", section.panel_description);
    shell(section.slug, &content, notices)
}

fn page(title: &str, body: &str) -> String {
    PAGE_HTML
        .replace("{{TITLE}}", title)
        .replace("{{STYLE}}", STYLE)
        .replace("{{BODY}}", body)
}

fn shell(active: &str, content: &str, notices: &[Notification]) -> String {
    let mut nav = nav_link("/dashboard", "Overview", active.is_empty());
    nav.push_str(&nav_link("/dashboard/sales", "Sales", active == "sales"));
    for section in &SECTIONS {
        nav.push_str(&nav_link(
            &format!("/dashboard/{}", section.slug),
            section.nav_label,
            active == section.slug,
        ));
    }

    let body = SHELL_BODY
        .replace("{{NAV}}", &nav)
        .replace("{{NOTICES}}", &render_notices(notices))
        .replace("{{CONTENT}}", content);
    page("Analytics Dashboard · Super Indo", &body)
}

fn nav_link(href: &str, label: &str, active: bool) -> String {
    let class = if active { "nav-link active" } else { "nav-link" };
    format!(r#"<a class="{class}" href="{href}">{label}</a>"#)
}

fn render_notices(notices: &[Notification]) -> String {
    if notices.is_empty() {
        return String::new();
    }
    let items: String = notices
        .iter()
        .map(|notice| {
            let kind = match notice.variant {
                Variant::Default => "toast",
                Variant::Destructive => "toast destructive",
            };
            format!(
                r#"<div class="{kind}" role="status"><strong>{}</strong><span>{}</span></div>"#,
                escape_html(&notice.title),
                escape_html(&notice.description)
            )
        })
        .collect();
    format!(r#"<div class="toasts">{items}</div>"#)
}

fn period_options(selected: Period) -> String {
    Period::ALL
        .iter()
        .map(|period| {
            let marker = if *period == selected { " selected" } else { "" };
            format!(
                r#"<option value="{}"{marker}>{}</option>"#,
                period.as_str(),
                period.title()
            )
        })
        .collect()
}

fn kpi_cards(model: &DashboardModel, layout: SalesLayout) -> String {
    let kpis = &model.kpis;
    let top = kpis.top_item.as_ref();
    let cards = match layout {
        SalesLayout::Overview => [
            ("Total Sales", rupiah_millions(kpis.total_value), "Across all SKUs".to_string()),
            ("Total SKUs", kpis.item_count.to_string(), "Products tracked".to_string()),
            ("Avg Sales/SKU", rupiah_thousands(kpis.average_value), "Per product".to_string()),
            (
                "Top Performer",
                format!("SKU {}", top.map_or("N/A", |item| item.sku.as_str())),
                top.map_or_else(|| "Rp 0M".to_string(), |item| rupiah_millions(item.value)),
            ),
        ],
        SalesLayout::Detailed => [
            (
                "Total Sales",
                rupiah(kpis.total_value),
                format!("{} view", model.period.title()),
            ),
            ("Total SKUs", kpis.item_count.to_string(), "Active products".to_string()),
            ("Avg Sales/SKU", rupiah(kpis.average_value), "Per product".to_string()),
            (
                "Top Performer",
                top.map_or_else(|| "N/A".to_string(), |item| item.label.clone()),
                top.map_or_else(|| "No data".to_string(), |item| rupiah(item.value)),
            ),
        ],
    };

    cards
        .iter()
        .map(|(label, value, caption)| {
            format!(
                r#"<div class="stat"><span class="label">{label}</span><span class="value">{}</span><span class="caption">{}</span></div>"#,
                escape_html(value),
                escape_html(caption)
            )
        })
        .collect()
}

fn bar_title(layout: SalesLayout) -> &'static str {
    match layout {
        SalesLayout::Overview => "Top 10 SKUs by Sales",
        SalesLayout::Detailed => "Top 10 Products by Sales",
    }
}

fn bar_subtitle(layout: SalesLayout) -> &'static str {
    match layout {
        SalesLayout::Overview => "Highest performing products in the current period",
        SalesLayout::Detailed => "Sales performance of top-selling SKUs",
    }
}

fn pie_title(layout: SalesLayout) -> &'static str {
    match layout {
        SalesLayout::Overview => "Top 5 SKUs Market Share",
        SalesLayout::Detailed => "Top 5 Products Market Share",
    }
}

fn empty_chart() -> String {
    r#"<div class="chart-empty">No data</div>"#.to_string()
}

fn bar_chart(items: &[RankedItem]) -> String {
    if items.is_empty() {
        return empty_chart();
    }

    const WIDTH: f64 = 640.0;
    const HEIGHT: f64 = 320.0;
    const LEFT: f64 = 84.0;
    const RIGHT: f64 = 16.0;
    const TOP: f64 = 16.0;
    const BOTTOM: f64 = 48.0;
    const TICKS: i64 = 4;

    let plot_w = WIDTH - LEFT - RIGHT;
    let plot_h = HEIGHT - TOP - BOTTOM;
    let max = items.iter().map(|item| item.value).max().unwrap_or(0).max(1);
    let slot = plot_w / items.len() as f64;
    let bar_w = slot * 0.64;

    let mut svg = String::new();
    for tick in 0..=TICKS {
        let value = max / TICKS * tick;
        let y = TOP + plot_h - plot_h * tick as f64 / TICKS as f64;
        svg.push_str(&format!(
            r#"<line class="chart-grid" x1="{LEFT}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" /><text class="chart-label" x="{:.2}" y="{:.2}" text-anchor="end">{}</text>"#,
            WIDTH - RIGHT,
            LEFT - 8.0,
            y + 4.0,
            group_thousands(value)
        ));
    }

    for (index, item) in items.iter().enumerate() {
        let height = item.value.max(0) as f64 / max as f64 * plot_h;
        let x = LEFT + slot * index as f64 + (slot - bar_w) / 2.0;
        let y = TOP + plot_h - height;
        let label = escape_html(&item.label);
        svg.push_str(&format!(
            r#"<rect class="chart-bar" x="{x:.2}" y="{y:.2}" width="{bar_w:.2}" height="{height:.2}" rx="6"><title>{label}: {}</title></rect><text class="chart-label" x="{:.2}" y="{:.2}" text-anchor="middle">{label}</text>"#,
            rupiah(item.value),
            x + bar_w / 2.0,
            HEIGHT - BOTTOM + 18.0
        ));
    }

    format!(
        r#"<svg class="chart" viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="Top SKUs by sales">{svg}</svg>"#
    )
}

fn pie_chart(slices: &[ShareSlice]) -> String {
    let total: i64 = slices.iter().map(|slice| slice.item.value.max(0)).sum();
    if total <= 0 {
        return empty_chart();
    }

    const CX: f64 = 160.0;
    const CY: f64 = 160.0;
    const R: f64 = 120.0;

    let mut segments = String::new();
    let mut legend = String::new();
    let mut angle = -FRAC_PI_2;

    for (index, slice) in slices.iter().enumerate() {
        let color = PALETTE[index % PALETTE.len()];
        let label = escape_html(&slice.item.label);
        let fraction = slice.item.value.max(0) as f64 / total as f64;

        legend.push_str(&format!(
            r#"<li><span class="swatch" style="background:{color}"></span>{label}: {}</li>"#,
            slice.share
        ));

        if fraction <= 0.0 {
            continue;
        }
        if fraction >= 1.0 {
            segments.push_str(&format!(
                r#"<circle cx="{CX}" cy="{CY}" r="{R}" fill="{color}"><title>{label}</title></circle>"#
            ));
            continue;
        }

        let end = angle + fraction * TAU;
        let large_arc = if fraction > 0.5 { 1 } else { 0 };
        segments.push_str(&format!(
            r#"<path d="M {CX} {CY} L {:.2} {:.2} A {R} {R} 0 {large_arc} 1 {:.2} {:.2} Z" fill="{color}"><title>{label}: {}</title></path>"#,
            CX + R * angle.cos(),
            CY + R * angle.sin(),
            CX + R * end.cos(),
            CY + R * end.sin(),
            slice.share
        ));
        angle = end;
    }

    format!(
        r#"<div class="pie"><svg class="chart pie-chart" viewBox="0 0 320 320" role="img" aria-label="Market share of top SKUs">{segments}</svg><ul class="legend">{legend}</ul></div>"#
    )
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>{{STYLE}}</style>
</head>
<body>
{{BODY}}
</body>
</html>
"#;

const STYLE: &str = r#"
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --muted: #8b857d;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
    }

    h1, h2 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      margin: 0;
    }

    a {
      color: inherit;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
    }

    .hero {
      width: min(1040px, 100%);
      margin: 0 auto;
      padding: 64px 18px;
      display: grid;
      gap: 40px;
      text-align: center;
      animation: rise 600ms ease;
    }

    .hero h1 {
      font-size: clamp(2.4rem, 5vw, 3.4rem);
    }

    .button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 26px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
      text-decoration: none;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
      justify-self: center;
    }

    .button.outline {
      background: white;
      color: var(--accent-2);
      box-shadow: none;
      border: 1px solid rgba(47, 72, 88, 0.2);
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
      text-align: left;
    }

    .stat, .card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.pending {
      color: var(--muted);
    }

    .stat .caption {
      font-size: 0.8rem;
      color: var(--muted);
    }

    .auth {
      min-height: 100vh;
      display: grid;
      place-items: center;
      padding: 32px 18px;
    }

    .auth form {
      width: min(420px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 14px;
    }

    .auth input {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 12px;
      padding: 12px 14px;
      font: inherit;
    }

    .layout {
      display: grid;
      grid-template-columns: 220px 1fr;
      min-height: 100vh;
    }

    .sidebar {
      background: var(--card);
      border-right: 1px solid rgba(47, 72, 88, 0.08);
      padding: 24px 14px;
      display: grid;
      align-content: start;
      gap: 6px;
    }

    .nav-link {
      padding: 10px 14px;
      border-radius: 12px;
      text-decoration: none;
      color: #6b645d;
      font-weight: 500;
    }

    .nav-link.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .topbar {
      display: flex;
      align-items: center;
      justify-content: space-between;
      padding: 18px 28px;
      border-bottom: 1px solid rgba(47, 72, 88, 0.08);
      background: var(--card);
    }

    .content {
      padding: 28px;
      display: grid;
      gap: 24px;
      animation: rise 600ms ease;
    }

    .content-header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font: inherit;
      font-weight: 600;
      color: #6b645d;
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    .chart-panel[hidden] {
      display: none;
    }

    .chart {
      width: 100%;
      height: 340px;
      display: block;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #7a746d;
      font-size: 11px;
    }

    .chart-bar {
      fill: var(--accent);
    }

    .chart-empty {
      height: 340px;
      display: grid;
      place-items: center;
      color: var(--muted);
    }

    .pie {
      display: grid;
      grid-template-columns: minmax(240px, 360px) 1fr;
      align-items: center;
      gap: 24px;
    }

    .legend {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    .swatch {
      display: inline-block;
      width: 12px;
      height: 12px;
      border-radius: 4px;
      margin-right: 8px;
    }

    .toasts {
      position: fixed;
      right: 18px;
      bottom: 18px;
      display: grid;
      gap: 10px;
      z-index: 10;
    }

    .toast {
      background: white;
      border-radius: 14px;
      padding: 14px 18px;
      box-shadow: var(--shadow);
      display: grid;
      gap: 4px;
      min-width: 260px;
    }

    .toast.destructive {
      background: #c63b2b;
      color: white;
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 760px) {
      .layout {
        grid-template-columns: 1fr;
      }
      .pie {
        grid-template-columns: 1fr;
      }
    }
"#;

const LANDING_BODY: &str = r#"<main class="hero">
    <header>
      <h1>Super Indo Analytics</h1>
      <p class="subtitle">Comprehensive retail analytics platform for tracking sales, inventory, and market performance across all stores</p>
    </header>

    <a class="button" href="/auth">Access Dashboard</a>

    <section class="panel">
      <div class="card">
        <h3>Sales Tracking</h3>
        <p class="hint">Monitor sales data per SKU across all stores with weekly and monthly breakdowns</p>
      </div>
      <div class="card">
        <h3>Inventory Control</h3>
        <p class="hint">Track stock levels at stores and distribution centers in real-time</p>
      </div>
      <div class="card">
        <h3>Market Analysis</h3>
        <p class="hint">Analyze market share and compare brand performance across categories</p>
      </div>
      <div class="card">
        <h3>Visual Reports</h3>
        <p class="hint">Interactive charts and dashboards for data-driven decision making</p>
      </div>
    </section>

    <section class="card">
      <h2>Available KPIs &amp; Data</h2>
      <div class="panel">
        <div>
          <h4>Sales Data per SKU</h4>
          <p class="hint">Weekly and Monthly | Per Store Data</p>
          <h4>Purchase &amp; Return Data</h4>
          <p class="hint">Per Store and Distribution Center</p>
          <h4>Service Level Metrics</h4>
          <p class="hint">Comparing ordered vs received quantities</p>
        </div>
        <div>
          <h4>Stock/Inventory Data</h4>
          <p class="hint">Real-time stock quantities per location</p>
          <h4>Market Share Analysis</h4>
          <p class="hint">Brand performance vs category totals</p>
        </div>
      </div>
    </section>
  </main>"#;

const AUTH_BODY: &str = r#"<main class="auth">
    <form method="post" action="/auth/login">
      <h1>Super Indo Analytics</h1>
      <p class="subtitle">Sign in to access the dashboard</p>
      <input type="email" name="email" placeholder="you@example.com" required />
      <input type="password" name="password" placeholder="Password" />
      <button class="button" type="submit">Sign In</button>
    </form>
  </main>
  {{NOTICES}}"#;

const SHELL_BODY: &str = r#"<div class="layout">
    <nav class="sidebar">{{NAV}}</nav>
    <div>
      <header class="topbar">
        <div>
          <h1>Analytics Dashboard</h1>
          <p class="subtitle">Retail Performance Insights</p>
        </div>
        <form method="post" action="/logout">
          <button class="button outline" type="submit">Logout</button>
        </form>
      </header>
      <main class="content">{{CONTENT}}</main>
    </div>
  </div>
  {{NOTICES}}"#;

const SALES_CONTENT: &str = r#"<div class="content-header">
        <h2>Sales Overview</h2>
        <form method="get" action="{{PERIOD_ACTION}}">
          <select name="period" onchange="this.form.submit()">{{PERIOD_OPTIONS}}</select>
        </form>
      </div>

      <section class="panel">{{KPIS}}</section>

      <div class="tabs" role="tablist">
        <button class="tab active" type="button" data-tab="bar" role="tab" aria-selected="true">Top 10 SKUs</button>
        <button class="tab" type="button" data-tab="pie" role="tab" aria-selected="false">Market Share</button>
      </div>

      <section class="card chart-panel" data-panel="bar">
        <h2>{{BAR_TITLE}}</h2>
        <p class="subtitle">{{BAR_SUBTITLE}}</p>
        {{BAR_CHART}}
      </section>

      <section class="card chart-panel" data-panel="pie" hidden>
        <h2>{{PIE_TITLE}}</h2>
        <p class="subtitle">Distribution of sales among top performers</p>
        {{PIE_CHART}}
      </section>

      <p class="hint">Data fetched {{UPDATED}}.</p>

      <script>
        const tabs = Array.from(document.querySelectorAll('.tab'));
        const panels = Array.from(document.querySelectorAll('.chart-panel'));
        tabs.forEach((button) => {
          button.addEventListener('click', () => {
            tabs.forEach((tab) => {
              const isActive = tab === button;
              tab.classList.toggle('active', isActive);
              tab.setAttribute('aria-selected', String(isActive));
            });
            panels.forEach((panel) => {
              panel.hidden = panel.dataset.panel !== button.dataset.tab;
            });
          });
        });
      </script>"#;

const SECTION_CONTENT: &str = r#"<div class="content-header">
        <div>
          <h2>{{HEADING}}</h2>
          <p class="subtitle">{{SUBTITLE}}</p>
        </div>
      </div>

      <section class="panel">{{CARDS}}</section>

      <section class="card">
        <h2>{{PANEL_TITLE}}</h2>
        <p class="subtitle">{{PANEL_DESCRIPTION}}</p>
        <div class="chart-empty">Connect your data source to view analytics</div>
      </section>"#;
