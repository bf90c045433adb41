//! Root document component - the complete HTML page
//!
//! Lays out the fixed summary panel, the introduction panel, and the main
//! content of collapsible sections, and embeds the app script that wires
//! all runtime interactivity.

use leptos::prelude::*;

use super::{CollapsibleSection, ICON_GRAPH, Icon, PieChart, PlainTable, SortableTable};
use crate::RenderOptions;
use crate::styles::{CSP, REPORT_CSS};
use crate::types::{Panel, Report};
use crate::view::TableState;

/// The complete HTML document for the report.
#[component]
pub fn ReportDocument(report: Report, options: RenderOptions) -> impl IntoView {
    view! {
        <html>
            <head>
                <meta charset="UTF-8" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{format!("{} - repository statistics", report.project)}</title>
                <style>{REPORT_CSS}</style>
            </head>
            <body>
                <div id="summary_div">
                    <div class="logo">
                        <Icon path=ICON_GRAPH size="24" />
                        <div>
                            <div class="logo-title">"gitstat"</div>
                            <div class="logo-project">{report.project.clone()}</div>
                        </div>
                    </div>
                    <ul id="summary_ul">
                        {report
                            .panels
                            .iter()
                            .map(|panel| {
                                view! {
                                    <li>
                                        <a href=format!("#{}_section", panel.id())>
                                            {panel.title().to_string()}
                                        </a>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>

                <div id="introduction_div">
                    <h1>{report.project.clone()}</h1>
                    {report
                        .intro
                        .iter()
                        .map(|paragraph| view! { <p>{paragraph.clone()}</p> })
                        .collect::<Vec<_>>()}
                </div>

                <main id="report_main">
                    {report
                        .panels
                        .iter()
                        .map(|panel| render_panel(panel, &options))
                        .collect::<Vec<_>>()}
                </main>

                <script>{APP_SCRIPT}</script>
            </body>
        </html>
    }
}

fn render_panel(panel: &Panel, options: &RenderOptions) -> AnyView {
    match panel {
        Panel::Charted(charted) => {
            let state = TableState::new(&charted.dataset, options.minor_threshold);
            let table_id = charted.id.clone();
            let dataset = charted.dataset.clone();
            let chart_id = charted.id.clone();
            let categories = charted.categories.clone();
            view! {
                <CollapsibleSection id=charted.id.clone() title=charted.title.clone()>
                    <div class="panel-flex">
                        <div class="table-wrap">
                            <SortableTable
                                id=table_id
                                dataset=dataset
                                state=state
                            />
                        </div>
                        <PieChart id=chart_id categories=categories />
                    </div>
                </CollapsibleSection>
            }
            .into_any()
        }
        Panel::Plain(plain) => {
            let table_id = format!("{}_table", plain.id);
            let rows = plain.rows.clone();
            view! {
                <CollapsibleSection id=plain.id.clone() title=plain.title.clone()>
                    <PlainTable id=table_id rows=rows />
                </CollapsibleSection>
            }
            .into_any()
        }
    }
}

/// Application logic (sorting, minor-row toggles, stripes, hover linking,
/// collapsible sections, layout).
///
/// Mirrors the transitions of [`crate::view::TableState`]: every handler
/// fully recomputes its local view from the latest toggled state, so
/// handlers are idempotent and "most recent event wins".
const APP_SCRIPT: &str = r#"
(() => {
  // 0. Zebra stripes - recomputed over currently displayed rows only
  const restripe = (tbody) => {
      let i = 0;
      tbody.querySelectorAll('tr').forEach(tr => {
          tr.classList.remove('even', 'odd');
          if (tr.style.display === 'none') return;
          tr.classList.add(i % 2 === 0 ? 'even' : 'odd');
          i++;
      });
  };

  // 1. Column sorting - a repeated click reverses the comparator
  document.querySelectorAll('table.stat thead th.sortable').forEach(th => {
      th.addEventListener('click', () => {
          const table = th.closest('table');
          const tbody = table.querySelector('tbody');
          const col = parseInt(th.dataset.col, 10);
          const asc = !th.classList.contains('asc');

          table.querySelectorAll('thead th').forEach(h => h.classList.remove('asc', 'desc'));
          th.classList.add(asc ? 'asc' : 'desc');

          const rows = Array.from(tbody.querySelectorAll('tr'));
          rows.sort((a, b) => {
              const x = a.children[col].dataset.sort;
              const y = b.children[col].dataset.sort;
              const nx = parseFloat(x);
              const ny = parseFloat(y);
              let cmp;
              if (!isNaN(nx) && !isNaN(ny)) {
                  cmp = nx - ny;
              } else {
                  const xs = x.toLowerCase();
                  const ys = y.toLowerCase();
                  cmp = xs < ys ? -1 : (xs > ys ? 1 : 0);
              }
              return asc ? cmp : -cmp;
          });
          rows.forEach(r => tbody.appendChild(r));
          restripe(tbody);
      });
  });

  // 2. Minor-row toggle in the table footer
  document.querySelectorAll('table.stat tfoot td.minor-toggle').forEach(btn => {
      btn.addEventListener('click', () => {
          const tbody = btn.closest('table').querySelector('tbody');
          const revealed = btn.classList.toggle('revealed');
          tbody.querySelectorAll('tr[data-minor="true"]').forEach(tr => {
              tr.style.display = revealed ? '' : 'none';
          });
          btn.textContent = revealed ? btn.dataset.labelHide : btn.dataset.labelShow;
          restripe(tbody);
      });
  });

  // 3. Row/sector hover linking - the last sector is the aggregate slot
  document.querySelectorAll('svg[data-chart]').forEach(svg => {
      const chartId = svg.dataset.chart;
      svg.querySelectorAll('path.sector').forEach(path => {
          if (path.dataset.aggregate === 'true') return;
          const row = document.getElementById(chartId + '-row-' + path.dataset.index);
          if (!row) return;
          const enter = () => {
              path.classList.add('lit');
              row.classList.add('hovered');
          };
          const leave = () => {
              path.classList.remove('lit');
              row.classList.remove('hovered');
          };
          [path, row].forEach(el => {
              el.addEventListener('mouseenter', enter);
              el.addEventListener('mouseleave', leave);
          });
      });
  });

  // 4. Collapsible sections - state is the 'open' class on the header
  document.querySelectorAll('.section-header[data-toggle]').forEach(hdr => {
      hdr.addEventListener('click', () => {
          const panel = document.getElementById(hdr.dataset.toggle);
          if (!panel) return;
          const open = hdr.classList.toggle('open');
          panel.style.display = open ? '' : 'none';
      });
  });

  // 5. Layout - keep the main panels clear of the summary panel
  const layout = () => {
      const summary = document.getElementById('summary_div');
      const intro = document.getElementById('introduction_div');
      const main = document.getElementById('report_main');
      if (!summary || !main) return;
      const offset = summary.offsetWidth > 0 ? summary.offsetWidth + 32 : 24;
      main.style.marginLeft = offset + 'px';
      if (intro) intro.style.marginLeft = offset + 'px';
  };
  window.addEventListener('resize', layout);
  layout();
})();
"#;
