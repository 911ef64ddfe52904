use chrono::{Datelike, NaiveDate};
use std::cmp::Ordering;

/// Offset applied to ISO weeks that belong to the following ISO year.
pub const WEEKS_PER_YEAR: u32 = 52;

/// Column/row of a day in the yearly grid.
///
/// `week` is 1-based for ordinary ISO weeks, `0` for the leading days of
/// January that ISO assigns to the previous year, and `53` for trailing
/// December days that ISO assigns to the next year. `weekday` is
/// 1 = Monday .. 7 = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub week: u32,
    pub weekday: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPosition {
    pub x: f64,
    pub y: f64,
}

impl GridCell {
    /// Top-left corner of the cell, relative to the grid origin. Week 0
    /// lands one pitch left of the origin.
    pub fn position(&self, square_size: f64, gap: f64) -> GridPosition {
        let pitch = square_size + gap;
        GridPosition {
            x: pitch * (self.week as f64 - 1.0),
            y: pitch * (self.weekday as f64 - 1.0),
        }
    }
}

/// Map `date` onto the grid of `nominal_year`.
pub fn grid_cell(date: NaiveDate, nominal_year: i32) -> GridCell {
    let iso = date.iso_week();
    let week = match iso.year().cmp(&nominal_year) {
        // ISO week 52/53 of the previous year, never week 1
        Ordering::Less => 0,
        Ordering::Greater => iso.week() + WEEKS_PER_YEAR,
        Ordering::Equal => iso.week(),
    };
    GridCell {
        week,
        weekday: date.weekday().number_from_monday(),
    }
}
