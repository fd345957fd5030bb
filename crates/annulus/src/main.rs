use annulus::{EntryLabel, MenuError, PathCommand, Point, RadialMenu, Size};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "annulus", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone)]
struct Layout {
    /// Widget width in pixels
    #[arg(long, default_value_t = 300.0)]
    width: f64,

    /// Widget height in pixels
    #[arg(long, default_value_t = 300.0)]
    height: f64,

    /// Start angle of the first entry, degrees clockwise from east
    #[arg(short = 'r', long, default_value_t = -90.0, allow_negative_numbers = true)]
    rotation: f64,

    /// Menu entries, in order
    entries: Vec<String>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Print the sector of every entry.
    Sectors {
        #[command(flatten)]
        layout: Layout,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the entry under a point, or "none".
    Hit {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,

        #[command(flatten)]
        layout: Layout,
    },
    /// Print the outline path of one entry's sector.
    Outline {
        index: usize,

        #[command(flatten)]
        layout: Layout,
    },
}

#[derive(Serialize)]
struct SectorRow<'a> {
    index: usize,
    entry: &'a EntryLabel,
    #[serde(flatten)]
    sector: &'a annulus::Sector,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sectors { layout, json } => {
            let menu = build_menu(&layout)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&sector_rows(&menu))?);
            } else {
                print!("{}", sector_table(&menu));
            }
        }
        Commands::Hit { x, y, layout } => {
            println!("{}", hit_label(&build_menu(&layout)?, Point::new(x, y)));
        }
        Commands::Outline { index, layout } => {
            for line in outline_lines(&build_menu(&layout)?, index)? {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn build_menu(layout: &Layout) -> anyhow::Result<RadialMenu<EntryLabel>> {
    let mut menu = RadialMenu::new();
    menu.set_rotation(layout.rotation)?;
    for entry in &layout.entries {
        menu.add_entry(EntryLabel::new(entry.as_str()));
    }
    menu.resize(Size::new(layout.width, layout.height))?;
    Ok(menu)
}

fn sector_rows(menu: &RadialMenu<EntryLabel>) -> Vec<SectorRow<'_>> {
    menu.entries()
        .iter()
        .zip(menu.sectors())
        .enumerate()
        .map(|(index, (entry, sector))| SectorRow {
            index,
            entry,
            sector,
        })
        .collect()
}

fn sector_table(menu: &RadialMenu<EntryLabel>) -> String {
    let mut out = format!(
        "{:>5}  {:<20} {:>9} {:>9} {:>9} {:>9}\n",
        "index", "entry", "start", "span", "inner", "outer"
    );
    for row in sector_rows(menu) {
        out.push_str(&format!(
            "{:>5}  {:<20} {:>9.3} {:>9.3} {:>9.3} {:>9.3}\n",
            row.index,
            row.entry.as_str(),
            row.sector.start_angle,
            row.sector.span,
            row.sector.inner_radius,
            row.sector.outer_radius
        ));
    }
    out
}

fn hit_label(menu: &RadialMenu<EntryLabel>, point: Point) -> String {
    menu.entry_at(point)
        .map(|entry| entry.to_string())
        .unwrap_or_else(|| "none".to_string())
}

fn outline_lines(menu: &RadialMenu<EntryLabel>, index: usize) -> Result<Vec<String>, MenuError> {
    Ok(menu
        .entry_geometry(index)?
        .outline()
        .iter()
        .map(describe)
        .collect())
}

fn describe(command: &PathCommand) -> String {
    match command {
        PathCommand::MoveTo(p) => format!("move_to {:.3} {:.3}", p.x, p.y),
        PathCommand::LineTo(p) => format!("line_to {:.3} {:.3}", p.x, p.y),
        PathCommand::Arc {
            center,
            radius,
            start,
            sweep,
        } => format!(
            "arc {:.3} {:.3} r={:.3} start={:.3} sweep={:.3}",
            center.x, center.y, radius, start, sweep
        ),
        PathCommand::Close => "close".to_string(),
    }
}
