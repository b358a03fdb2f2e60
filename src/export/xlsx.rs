// src/export/xlsx.rs

use crate::core::logic::PlanReport;
use crate::errors::{AppError, AppResult};
use crate::export::excel_date::to_excel_serial;
use crate::export::model::get_headers;
use crate::export::notify_export_success;
use crate::models::BlockKind;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const DATE_TIME_FMT: &str = "yyyy-mm-dd hh:mm";
const DATE_FMT: &str = "yyyy-mm-dd";

/// Export XLSX: a `Blocks` sheet (one row per block, banded by kind) and a
/// `Days` sheet with per-day totals.
pub(crate) fn export_xlsx(report: &PlanReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    let blocks = workbook.add_worksheet();
    blocks.set_name("Blocks").map_err(to_app_error)?;
    write_header(blocks, &get_headers())?;

    let mut widths: Vec<usize> = get_headers().iter().map(|h| h.width()).collect();
    widths[0] = widths[0].max(DATE_FMT.len());
    widths[2] = widths[2].max(DATE_TIME_FMT.len());
    widths[3] = widths[3].max(DATE_TIME_FMT.len());

    for (i, b) in report.result.blocks.iter().enumerate() {
        let row = (i + 1) as u32;
        let bg = band_for(b.kind);
        let weekday = b.day.format("%a").to_string();
        widths[1] = widths[1].max(weekday.width());

        let day_serial = b.day.and_hms_opt(0, 0, 0).map_or(0.0, |d| to_excel_serial(&d));
        blocks
            .write_number_with_format(row, 0, day_serial, &cell(bg).set_num_format(DATE_FMT))
            .map_err(to_app_error)?;
        blocks
            .write_with_format(row, 1, weekday.as_str(), &cell(bg))
            .map_err(to_app_error)?;
        blocks
            .write_number_with_format(
                row,
                2,
                to_excel_serial(&b.start()),
                &cell(bg).set_num_format(DATE_TIME_FMT),
            )
            .map_err(to_app_error)?;
        blocks
            .write_number_with_format(
                row,
                3,
                to_excel_serial(&b.end()),
                &cell(bg).set_num_format(DATE_TIME_FMT),
            )
            .map_err(to_app_error)?;
        blocks
            .write_with_format(row, 4, b.kind.as_str(), &cell(bg))
            .map_err(to_app_error)?;
        blocks
            .write_number_with_format(row, 5, b.duration_minutes, &cell(bg).set_num_format("0.00"))
            .map_err(to_app_error)?;
    }
    set_widths(blocks, &widths)?;

    let days = workbook.add_worksheet();
    days.set_name("Days").map_err(to_app_error)?;
    let day_headers = ["day", "setup_minutes", "production_minutes", "break_minutes"];
    write_header(days, &day_headers)?;

    for (i, d) in report.days.iter().enumerate() {
        let row = (i + 1) as u32;
        let bg = if i % 2 == 0 { Color::RGB(0xEAF3FB) } else { Color::White };
        let day_serial = d.day.and_hms_opt(0, 0, 0).map_or(0.0, |x| to_excel_serial(&x));

        days.write_number_with_format(row, 0, day_serial, &cell(bg).set_num_format(DATE_FMT))
            .map_err(to_app_error)?;
        for (col, value) in [d.setup_minutes, d.production_minutes, d.break_minutes]
            .into_iter()
            .enumerate()
        {
            days.write_number_with_format(
                row,
                (col + 1) as u16,
                value,
                &cell(bg).set_num_format("0.00"),
            )
            .map_err(to_app_error)?;
        }
    }
    let day_widths: Vec<usize> = day_headers.iter().map(|h| h.width().max(DATE_FMT.len())).collect();
    set_widths(days, &day_widths)?;

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_header(ws: &mut Worksheet, headers: &[&str]) -> AppResult<()> {
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        ws.write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }
    ws.set_freeze_panes(1, 0).map_err(to_app_error)?;
    Ok(())
}

fn set_widths(ws: &mut Worksheet, widths: &[usize]) -> AppResult<()> {
    for (c, w) in widths.iter().enumerate() {
        ws.set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }
    Ok(())
}

fn band_for(kind: BlockKind) -> Color {
    match kind {
        BlockKind::Setup => Color::RGB(0xFFF2CC),
        BlockKind::Production => Color::RGB(0xE2EFDA),
        BlockKind::Break => Color::RGB(0xEDEDED),
    }
}

fn cell(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
