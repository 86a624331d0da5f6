//! Scripted browsing session over the project grid.
//!
//! Loads a catalog (from `HYDROGRID_CMS_URL` via one GET, or the bundled
//! document), shapes it with an optional query from argv, mounts the grid
//! at a desktop viewport and replays wheel scrolls, a row jump and a
//! resize, printing each rendered window.

use anyhow::{Context, Result};
use hydrogrid_foundation::viewport::{ResizeEvents, Viewport};
use hydrogrid_model::{ProjectCatalog, ProjectFilter};
use hydrogrid_ui::{AttachedGrid, ProjectGrid, ProjectGridSpec, ScrollProgressBar};

const BUNDLED_CATALOG: &str = include_str!("../data/projects.json");

fn load_catalog() -> Result<ProjectCatalog> {
    let payload = match std::env::var("HYDROGRID_CMS_URL") {
        Ok(url) => {
            log::info!("fetching catalog from {url}");
            reqwest::blocking::get(&url)
                .and_then(|response| response.error_for_status())
                .and_then(|response| response.text())
                .with_context(|| format!("catalog fetch from {url} failed"))?
        }
        Err(_) => {
            log::info!("using bundled catalog");
            BUNDLED_CATALOG.to_owned()
        }
    };
    ProjectCatalog::from_json(&payload).context("catalog decode failed")
}

fn print_window(label: &str, grid: &AttachedGrid, progress: &ScrollProgressBar) {
    let window = grid.window();
    match window.row_span() {
        Some((first, last)) => {
            println!(
                "[{label}] columns={} rows {first}..={last}, spacer {:.0}px, {:.0}% scrolled",
                window.columns,
                window.total_height,
                progress.fraction() * 100.0
            );
            for row in &window.rows {
                let cards: Vec<String> = row
                    .cards
                    .iter()
                    .map(|card| format!("{} [{}]", card.title.to_plain_text(), card.badge.label))
                    .collect();
                let padding = if row.trailing_placeholders > 0 {
                    format!(" (+{} empty)", row.trailing_placeholders)
                } else {
                    String::new()
                };
                println!("  row {:>2} @ {:>5.0}px  {}{padding}", row.index, row.offset, cards.join(" | "));
            }
        }
        None => println!("[{label}] nothing to render"),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let catalog = load_catalog()?;
    let query = std::env::args().nth(1).unwrap_or_default();
    let filter = if query.is_empty() {
        ProjectFilter::new()
    } else {
        ProjectFilter::new().with_query(query.clone())
    };

    let shaped: Vec<_> = catalog.select(&filter).into_iter().cloned().collect();
    log::info!("{} of {} projects selected", shaped.len(), catalog.len());

    let events = ResizeEvents::new();
    let grid = ProjectGrid::new(shaped, query, ProjectGridSpec::default())
        .attach(&events, Viewport::new(1280.0, 720.0));
    let progress = ScrollProgressBar::new(grid.state());

    print_window("initial", &grid, &progress);

    for notch in 1..=3 {
        grid.scroll_by(400.0);
        print_window(&format!("wheel {notch}"), &grid, &progress);
    }

    grid.scroll_to_row(0);
    print_window("back to top", &grid, &progress);

    // Narrowing to a tablet width crosses the 1024 breakpoint: two columns,
    // same items, repartitioned.
    events.emit(Viewport::new(800.0, 720.0));
    print_window("tablet width", &grid, &progress);

    Ok(())
}
