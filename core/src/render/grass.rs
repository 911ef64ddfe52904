use chrono::NaiveDate;
use svg::Document;

use crate::config::Layout;
use crate::model::color::ColorTable;
use crate::model::day_record::{DayRecord, GrassData};
use crate::model::histogram::{display_weight, Histogram};
use crate::render::draw::{canvas, rect, text, translated};

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "", "Wed", "", "Fri", "", "Sun"];
const MONTH_LABEL_BASELINE: f64 = 20.0;

/// A filled rectangle for (part of) one day, in grid-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedSquare {
    pub date: NaiveDate,
    pub location: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendRow {
    pub location: String,
    pub weight: f64,
    pub label: String,
    pub color: String,
}

pub struct Renderer {
    layout: Layout,
    colors: ColorTable,
}

impl Renderer {
    pub fn new(layout: Layout, colors: ColorTable) -> Self {
        Self { layout, colors }
    }

    pub fn colors(&self) -> &ColorTable {
        &self.colors
    }

    /// A split day becomes N stacked strips of height `square/N`, top to
    /// bottom in the order the locations were listed.
    pub fn place_day(&self, record: &DayRecord) -> Vec<PlacedSquare> {
        let size = self.layout.square_size;
        let origin = record.cell.position(size, self.layout.gap);
        let strip = size / record.locations.len() as f64;

        record
            .locations
            .iter()
            .enumerate()
            .map(|(i, location)| PlacedSquare {
                date: record.date,
                location: location.clone(),
                x: origin.x,
                y: origin.y + strip * i as f64,
                width: size,
                height: strip,
                color: self.colors.color_for(location).to_string(),
            })
            .collect()
    }

    pub fn place_year(&self, data: &GrassData, year: i32) -> Vec<PlacedSquare> {
        data.days_in_year(year)
            .flat_map(|record| self.place_day(record))
            .collect()
    }

    /// Relative to the left edge, starting at the top margin.
    pub fn weekday_labels(&self) -> Vec<TextLabel> {
        let pitch = self.layout.pitch();
        WEEKDAY_LABELS
            .iter()
            .enumerate()
            .map(|(i, label)| TextLabel {
                x: 0.0,
                y: pitch * (i + 1) as f64,
                text: label.to_string(),
            })
            .collect()
    }

    /// Month numbers spread evenly over `max_weeks` columns.
    pub fn month_labels(&self) -> Vec<TextLabel> {
        let month_width = self.layout.max_weeks as f64 / 12.0 * self.layout.pitch();
        (1..=12)
            .map(|month| TextLabel {
                x: month_width * (month - 1) as f64,
                y: MONTH_LABEL_BASELINE,
                text: month.to_string(),
            })
            .collect()
    }

    pub fn year_document(&self, data: &GrassData, year: i32) -> Document {
        let squares = self
            .place_year(data, year)
            .iter()
            .fold(translated(self.layout.left_margin, self.layout.top_margin), |g, s| {
                g.add(rect(s.x, s.y, s.width, s.height, &s.color))
            });
        let weekdays = self
            .weekday_labels()
            .iter()
            .fold(translated(0.0, self.layout.top_margin), |g, l| {
                g.add(text(l.x, l.y, &l.text))
            });
        let months = self
            .month_labels()
            .iter()
            .fold(translated(self.layout.left_margin, 0.0), |g, l| {
                g.add(text(l.x, l.y, &l.text))
            });

        canvas(self.layout.year_canvas)
            .add(squares)
            .add(weekdays)
            .add(months)
    }

    pub fn legend_rows(&self, histo: &Histogram<String>) -> Vec<LegendRow> {
        histo
            .flatten()
            .into_iter()
            .map(|(location, weight)| LegendRow {
                label: format!("{} ({} days)", location, display_weight(weight)),
                color: self.colors.color_for(&location).to_string(),
                location,
                weight,
            })
            .collect()
    }

    pub fn legend_document(&self, histo: &Histogram<String>) -> Document {
        let size = self.layout.legend_square_size;
        let pitch = self.layout.legend_pitch();
        let label_x = size + self.layout.legend_gap;

        let mut group = translated(0.0, 0.0);
        for (i, row) in self.legend_rows(histo).iter().enumerate() {
            let i = i as f64;
            group = group
                .add(rect(0.0, (i + 0.5) * pitch, size, size, &row.color))
                .add(text(label_x, (i + 1.0) * pitch, &row.label));
        }
        canvas(self.layout.legend_canvas).add(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::histogram::location_histogram;

    fn renderer() -> Renderer {
        Renderer::new(Layout::default(), ColorTable::default())
    }

    fn record(m: u32, d: u32, locations: &[&str]) -> DayRecord {
        let date = NaiveDate::from_ymd_opt(2024, m, d).unwrap();
        DayRecord::new(date, 2024, locations.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_single_location_square() {
        let squares = renderer().place_day(&record(1, 1, &["Tokyo"]));
        assert_eq!(
            squares,
            vec![PlacedSquare {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                location: "Tokyo".to_string(),
                x: 0.0,
                y: 0.0,
                width: 10.0,
                height: 10.0,
                color: "black".to_string(),
            }]
        );
    }

    #[test]
    fn test_split_day_stacks_strips() {
        // 2024-06-15: week 24, Saturday
        let squares = renderer().place_day(&record(6, 15, &["Kyoto", "Kobe"]));
        assert_eq!(squares.len(), 2);
        assert_eq!((squares[0].x, squares[0].y, squares[0].height), (276.0, 60.0, 5.0));
        assert_eq!((squares[1].x, squares[1].y, squares[1].height), (276.0, 65.0, 5.0));
        assert_eq!(squares[0].color, "brown");
        assert_eq!(squares[1].color, "red");
    }

    #[test]
    fn test_unknown_location_uses_fallback() {
        let colors = ColorTable::empty("silver").with("Tokyo", "navy");
        let renderer = Renderer::new(Layout::default(), colors);
        let squares = renderer.place_day(&record(3, 3, &["Atlantis"]));
        assert_eq!(squares[0].color, "silver");
    }

    #[test]
    fn test_labels() {
        let weekdays = renderer().weekday_labels();
        assert_eq!(weekdays.len(), 7);
        assert_eq!((weekdays[0].y, weekdays[0].text.as_str()), (12.0, "Mon"));
        assert_eq!((weekdays[1].y, weekdays[1].text.as_str()), (24.0, ""));
        assert_eq!((weekdays[6].y, weekdays[6].text.as_str()), (84.0, "Sun"));

        let months = renderer().month_labels();
        assert_eq!(months.len(), 12);
        assert_eq!((months[0].x, months[0].text.as_str()), (0.0, "1"));
        assert_eq!((months[1].x, months[1].text.as_str()), (54.0, "2"));
        assert_eq!((months[11].x, months[11].text.as_str()), (594.0, "12"));
        assert!(months.iter().all(|m| m.y == 20.0));
    }

    #[test]
    fn test_year_document_only_draws_that_year() {
        let mut data = GrassData::new();
        data.insert(record(1, 1, &["Tokyo"]));
        data.insert(record(1, 2, &["Kyoto", "Kobe"]));
        let other = NaiveDate::from_ymd_opt(2023, 5, 5).unwrap();
        data.insert(DayRecord::new(other, 2023, vec!["Hida".into()]));

        assert_eq!(renderer().place_year(&data, 2024).len(), 3);

        let out = renderer().year_document(&data, 2024).to_string();
        assert!(out.contains(r#"viewBox="0 0 1000 200""#));
        assert_eq!(out.matches("<rect").count(), 3);
        assert_eq!(out.matches("<text").count(), 7 + 12);
        assert!(out.contains("translate(50, 50)"));
        assert!(!out.contains(r#"fill="white""#));
    }

    #[test]
    fn test_legend_rows_ranked() {
        let records = vec![
            record(1, 1, &["Tokyo"]),
            record(1, 2, &["Osaka"]),
            record(1, 3, &["Osaka"]),
            record(1, 4, &["Osaka", "Nara"]),
        ];
        let histo = location_histogram(&records);
        let rows = renderer().legend_rows(&histo);

        let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Osaka (2.5 days)", "Tokyo (1 days)", "Nara (0.5 days)"]);
        assert_eq!(rows[2].color, "gray");

        let out = renderer().legend_document(&histo).to_string();
        assert!(out.contains(r#"viewBox="0 0 1000 500""#));
        assert_eq!(out.matches("<rect").count(), 3);
        assert!(out.find("Osaka (2.5 days)").unwrap() < out.find("Tokyo (1 days)").unwrap());
    }
}
