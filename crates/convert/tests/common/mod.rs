//! Workbook fixtures shaped like the city-service exports: two preamble
//! rows, headers on row 3, data below.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use gorod_convert::workbook::REQUIRED_COLUMNS;
use rust_xlsxwriter::Workbook;

pub const SHEET: &str = "Лист1";

#[derive(Debug, Clone, Copy)]
pub enum Val<'a> {
    S(&'a str),
    N(f64),
    Blank,
}

/// Message number, okrug, district, address, object, topic, text, photos, lat, lon.
pub type Row<'a> = [Val<'a>; 10];

pub fn text_row<'a>(cells: [&'a str; 10]) -> Row<'a> {
    cells.map(|c| if c.is_empty() { Val::Blank } else { Val::S(c) })
}

pub fn write_workbook(path: &Path, sheet: &str, header: &[&str], rows: &[Row<'_>]) {
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    ws.set_name(sheet).unwrap();
    ws.write_string(0, 0, "Выгрузка сообщений").unwrap();
    ws.write_string(1, 0, "Период: май").unwrap();

    for (col, name) in header.iter().enumerate() {
        ws.write_string(2, col as u16, *name).unwrap();
    }
    for (i, row) in rows.iter().enumerate() {
        let r = 3 + i as u32;
        for (col, val) in row.iter().enumerate() {
            match val {
                Val::S(s) => {
                    ws.write_string(r, col as u16, *s).unwrap();
                }
                Val::N(n) => {
                    ws.write_number(r, col as u16, *n).unwrap();
                }
                Val::Blank => {}
            }
        }
    }
    workbook.save(path).unwrap();
}

/// Standard report workbook at `dir/name`.
pub fn write_report(dir: &Path, name: &str, rows: &[Row<'_>]) -> PathBuf {
    let path = dir.join(name);
    write_workbook(&path, SHEET, &REQUIRED_COLUMNS, rows);
    path
}

pub fn valid_row<'a>(id: &'a str, okrug: &'a str, district: &'a str) -> Row<'a> {
    text_row([
        id,
        okrug,
        district,
        "ул. Пушкина, 1",
        "Жилой дом",
        "Мусор",
        "Не вывозят мусор",
        "",
        "55,7887",
        "37,6279",
    ])
}
