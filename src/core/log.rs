use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

fn color_for_operation(op: &str) -> Colour {
    match op {
        "draw" => Colour::Green,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Cut `s` to `max` characters, ending with "..." when shortened.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut cut: String = s.chars().take(max.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let rows = load_log(&pool.conn)?;

        if rows.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        // "operation (target)" padded on its visible width, colour on the operation only
        let lines: Vec<(i64, String, String, String, String)> = rows
            .into_iter()
            .map(|(id, raw_date, op, target, message)| {
                let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(raw_date);
                let visible = if target.is_empty() {
                    op.clone()
                } else {
                    truncate(&format!("{op} ({target})"), MAX_OP_WIDTH)
                };
                (id, date, op, visible, message)
            })
            .collect();

        let id_w = lines.iter().map(|l| l.0.to_string().len()).max().unwrap_or(1);
        let date_w = lines.iter().map(|l| l.1.len()).max().unwrap_or(10);
        let op_w = lines
            .iter()
            .map(|l| l.3.chars().count())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, date, op, visible, message) in lines {
            let padding = " ".repeat(op_w.saturating_sub(visible.chars().count()));
            let colored = match visible.strip_prefix(op.as_str()) {
                Some(rest) => format!("{}{rest}", color_for_operation(&op).paint(op.as_str())),
                None => color_for_operation(&op).paint(visible.as_str()).to_string(),
            };

            println!("{id:>id_w$}: {date:<date_w$} | {colored}{padding} => {message}");
        }

        Ok(())
    }
}
