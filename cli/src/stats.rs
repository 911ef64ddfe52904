use anyhow::Result;
use grass_core::service::dto::{to_json, LocationSummary};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct LocationRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Days")]
    days: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "Color")]
    color: String,
}

impl From<&LocationSummary> for LocationRow {
    fn from(s: &LocationSummary) -> Self {
        Self {
            rank: s.rank,
            location: s.location.clone(),
            days: s.display_days.clone(),
            share: format!("{:.1}%", s.share * 100.0),
            color: s.color.clone(),
        }
    }
}

pub fn show_stats(summaries: &[LocationSummary], json: bool) -> Result<()> {
    if json {
        println!("{}", to_json(summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No days recorded.");
        return Ok(());
    }

    let rows: Vec<LocationRow> = summaries.iter().map(LocationRow::from).collect();
    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);

    let total: f64 = summaries.iter().map(|s| s.days).sum();
    println!("Total: {} days", grass_core::display_weight(total));
    Ok(())
}
